// Generate a random SIGNING_SECRET
//
// Usage: echo "SIGNING_SECRET=$(cargo run --bin generate-secret)" >> .env

use chessplayers_api::auth::config::generate_signing_secret;

fn main() {
    println!("{}", generate_signing_secret());
}
