//! Demo client for the census service.
//!
//! Walks the REST surface end to end: create a person, fetch it by id,
//! list everyone, replace the record, then delete it. Point it at a
//! running census_api with `CENSUS_URL` (default http://localhost:8080).

use eyre::Result;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct Person {
    id: Uuid,
    first_name: String,
    last_name: String,
    country: String,
    age: i32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let base = std::env::var("CENSUS_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let client = Client::new();

    // Create
    let response = client
        .post(format!("{base}/people"))
        .json(&json!({
            "first_name": "John",
            "last_name": "Doe",
            "country": "UK",
            "age": 50
        }))
        .send()
        .await?;
    println!("POST: {}", response.status());
    let created: Person = response.json().await?;
    println!(
        "  created {} {} ({}, {}) id={}",
        created.first_name, created.last_name, created.country, created.age, created.id
    );

    // Fetch it back by id
    let response = client
        .get(format!("{base}/people/{}", created.id))
        .send()
        .await?;
    println!("GET: {}", response.status());
    let fetched: Person = response.json().await?;
    println!("  {:?}", fetched);

    // List everyone
    let response = client.get(format!("{base}/people")).send().await?;
    println!("ALL: {}", response.status());
    let all: Vec<Person> = response.json().await?;
    for person in &all {
        println!("  {:?}", person);
    }

    // Replace the record, moving it to another country
    let response = client
        .put(format!("{base}/people/{}", created.id))
        .json(&json!({
            "first_name": "Laura",
            "last_name": "So",
            "country": "US",
            "age": 18
        }))
        .send()
        .await?;
    println!("PUT: {}", response.status());
    let updated: Person = response.json().await?;
    println!("  {:?}", updated);

    // Delete it
    let response = client
        .delete(format!("{base}/people/{}", created.id))
        .send()
        .await?;
    println!("DELETE: {}", response.status());

    // Gone now
    let response = client
        .get(format!("{base}/people/{}", created.id))
        .send()
        .await?;
    println!("GET after delete: {}", response.status());

    Ok(())
}
