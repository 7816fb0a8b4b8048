use shadow_rs::ShadowBuilder;

// Embeds git and build metadata for `evcharge --version`.
fn main() {
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
