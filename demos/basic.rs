use arq::{QueryMultiMap, decode_query, encode_query};

fn main() {
    // Decode a query string into an ordered multi-map
    let mut map = decode_query("name=John&age=30&tag=a&tag=b");

    println!("name: {:?}", map.get("name")); // Some(["John"])
    println!("tag: {:?}", map.get("tag")); // Some(["a", "b"])
    println!();

    // Append a value; the repeated key keeps its position
    map.append("tag", "c");
    println!("After append: {}", encode_query(&map)); // name=John&age=30&tag=a&tag=b&tag=c
    println!();

    // Remove a key entirely
    map.remove("age");
    println!("After remove: {}", encode_query(&map)); // name=John&tag=a&tag=b&tag=c
    println!();

    // Special characters use form encoding: space becomes '+',
    // everything outside the unreserved set becomes lowercase %xy
    let mut special = QueryMultiMap::new();
    special.append("item", "s #e");
    println!("Encoded: {}", encode_query(&special)); // item=s+%23e
}
