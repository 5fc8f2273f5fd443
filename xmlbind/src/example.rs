//! Typed bindings for the `Example` document.
//!
//! ```xml
//! <Example>
//!     <node1 att1="5" att2="1.5" att3="x"/>
//!     <node2 att1="cat">
//!         <node3 att1="a" att2="b">hi</node3>
//!     </node2>
//!     <node4 att1="ints"><node5>42</node5></node4>
//!     <node6 att1="floats"><node7>2.5</node7></node6>
//! </Example>
//! ```
//!
//! `node3@att2` and `node4@att1` are left out of saved documents when empty.
//! Load failures are logged through `tracing`.
//!
//! The bindings are the unedited output of
//! [`generate_from_prototype`](xmlbind_codegen::generate_from_prototype) for
//! [`PROTOTYPE`].

/// Root element tag.
pub const ROOT_TAG: &str = "Example";

/// Prototype the bindings in this module correspond to.
pub const PROTOTYPE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Example>
    <node1 nodeCount="1" att1="int" att2="float" att3="string"/>
    <node2 nodeCount="2" att1="string">
        <node3 nodeCount="2" att1="string" att2="string?">string</node3>
    </node2>
    <node4 nodeCount="2" att1="string?">
        <node5 nodeCount="2">int</node5>
    </node4>
    <node6 nodeCount="2" att1="string">
        <node7 nodeCount="2">float</node7>
    </node6>
</Example>
"#;

#[rustfmt::skip]
mod bindings;

pub use bindings::{Example, ExampleFile, Node1, Node2, Node3, Node4, Node5, Node6, Node7};
