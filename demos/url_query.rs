use arq::QueryStoreExt;
use url::Url;

fn main() {
    let mut url = Url::parse("http://www.test.com/").expect("Failed to parse URL");

    // Mutations write straight back into the URL's query string
    url.query_view()
        .add("key", &["value1", "value2"])
        .expect("add failed");
    println!("{url}"); // http://www.test.com/?key=value1&key=value2

    url.query_view()
        .set("key", &["value3"])
        .expect("set failed");
    println!("{url}"); // http://www.test.com/?key=value3

    // Presence checks
    let view = url.query_view();
    println!("has key: {:?}", view.has("key")); // Ok(true)
    println!("has key=value1: {:?}", view.has_all("key", &["value1"])); // Ok(false)

    // Removing the last key drops the '?' entirely
    url.query_view().remove("key").expect("remove failed");
    println!("{url}"); // http://www.test.com/
}
