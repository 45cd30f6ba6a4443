//! `sqlx::migrate!` embeds `migrations/` at compile time, so rebuild when it
//! changes.
fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
