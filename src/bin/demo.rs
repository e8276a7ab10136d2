use fixed_hashtable::{numeric, text, HashTable, HashValue, LinearProbing, ValueRef};
use log::{info, warn};

fn scenario() -> Vec<ValueRef> {
    vec![
        numeric(5.5f32),
        numeric(200u8),
        text("hello world"),
        text("hey"),
    ]
}

fn main() {
    env_logger::builder().init();

    let mut chained: HashTable<13> = HashTable::new();
    let mut probed: HashTable<13, LinearProbing> = HashTable::new();

    for v in scenario() {
        match chained.insert(v.clone()) {
            Ok(slot) => info!("chained: {} -> [{}]", v.display(), slot),
            Err(e) => warn!("chained: {} not stored: {}", v.display(), e),
        }
        match probed.insert(v.clone()) {
            Ok(slot) => info!("probed: {} -> [{}]", v.display(), slot),
            Err(e) => warn!("probed: {} not stored: {}", v.display(), e),
        }
    }

    println!("{chained}");
    println!("{probed}");
}
