//! tabula demo main.rs
//! Walks the public engine API:
//! - classic lowercase Vigenère round trip
//! - lenient pass-through of out-of-alphabet characters
//! - strict mode rejection
//! - custom alphabets and default secrets

use tabula::{Engine, EngineOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // --- 1️⃣ Classic lowercase round trip ---
    let engine = Engine::new(EngineOptions {
        kind: Some("lowercase".to_string()),
        ..Default::default()
    })?;

    let encoded = engine.encode_with("hello", "key")?;
    println!("lowercase: \"hello\" + \"key\" -> {encoded:?}");

    let decoded = engine.decode_with(&encoded, "key")?;
    println!("round trip: {decoded:?}\n");
    assert_eq!(decoded, "hello");

    // --- 2️⃣ Lenient pass-through ---
    let encoded = engine.encode_with("hello world!", "key")?;
    println!("lenient: \"hello world!\" -> {encoded:?}");
    println!("space and '!' pass through, keystream stays on the absolute index\n");
    assert_eq!(engine.decode_with(&encoded, "key")?, "hello world!");

    // --- 3️⃣ Strict mode rejects the same message ---
    let strict = Engine::new(EngineOptions {
        kind: Some("lowercase".to_string()),
        strict: true,
        ..Default::default()
    })?;
    let rejected = strict.encode_with("hello world!", "key");
    assert!(rejected.is_err());
    println!("strict: {}\n", rejected.unwrap_err());

    // --- 4️⃣ Custom alphabet with a default secret ---
    let emoji = Engine::new(EngineOptions {
        kind: Some("custom".to_string()),
        characters: Some("🟥🟧🟨🟩🟦🟪".into()),
        secret: Some("🟦🟥".to_string()),
        ..Default::default()
    })?;
    let encoded = emoji.encode("🟥🟧🟨")?;
    println!("custom: \"🟥🟧🟨\" -> {encoded}");
    assert_eq!(emoji.decode(&encoded)?, "🟥🟧🟨");

    // --- 5️⃣ Default kind is base64 ---
    let engine = Engine::new(EngineOptions::default())?;
    println!("default alphabet: {}", engine.alphabet());

    println!("\n✅ All demos passed.");
    Ok(())
}
