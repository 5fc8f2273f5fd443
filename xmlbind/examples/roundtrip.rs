//! Builds an `Example` document, saves it, loads it back through both the
//! typed bindings and the generic engine, and prints the generated Rust
//! bindings and XSD for its prototype.
//!
//! Run with: `RUST_LOG=debug cargo run --example roundtrip`

use xmlbind::codegen::{XsdGenerator, generate_from_prototype};
use xmlbind::example::{self, Example, ExampleFile, Node1, Node2, Node3, Node6, Node7};
use xmlbind::example_text;
use xmlbind::schema::parse_prototype;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("example.xml");

    let file = ExampleFile::new(Example {
        node1: Node1 {
            att1: 5,
            att2: 1.5,
            att3: "x".to_string(),
        },
        node2: vec![Node2 {
            att1: "cat".to_string(),
            node3: vec![Node3 {
                att1: "a".to_string(),
                att2: String::new(),
                text: "hi".to_string(),
            }],
        }],
        node4: Vec::new(),
        node6: vec![Node6 {
            att1: "floats".to_string(),
            node7: vec![Node7 { text: 2.5 }, Node7 { text: -0.125 }],
        }],
    });
    file.save(&path)?;
    println!(
        "Saved {}:\n{}",
        path.display(),
        std::fs::read_to_string(&path)?
    );

    let mut typed = ExampleFile::default();
    typed.load(&path)?;
    println!("Typed reload identical: {}", typed.root() == file.root());

    let mut text = example_text::new_file()?;
    text.load(&path)?;
    println!(
        "Generic reload has {} node2 element(s)",
        text.root().root().children("node2").len()
    );

    // Failed loads leave the tree alone.
    let missing = dir.path().join("missing.xml");
    if let Err(e) = typed.load(&missing) {
        println!("Load of {} failed as expected: {}", missing.display(), e);
    }
    println!(
        "Tree intact after failed load: {}",
        typed.root() == file.root()
    );

    println!(
        "\nGenerated bindings:\n{}",
        generate_from_prototype(example::PROTOTYPE)?
    );

    let schema = parse_prototype(example::PROTOTYPE)?;
    println!(
        "\nGenerated XSD:\n{}",
        XsdGenerator::new(&schema).generate()?
    );

    Ok(())
}
