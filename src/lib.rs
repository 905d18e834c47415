#![deny(clippy::all)]
#![deny(clippy::cargo)]
#![deny(clippy::complexity)]
#![deny(clippy::correctness)]
#![deny(clippy::nursery)]
#![deny(clippy::pedantic)]
#![deny(clippy::perf)]
#![deny(clippy::style)]
#![deny(clippy::suspicious)]
#![deny(missing_docs)]
#![warn(clippy::multiple_crate_versions)]
// restriction is wild, but some good things for consistency in there, rather would allow things
// explicitly so any new lints pop up and annoy if they get added and then can decide to keep or
// ditch them!
#![warn(clippy::restriction)]
#![allow(clippy::implicit_return)]
#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::question_mark_used)]
#![allow(clippy::separated_literal_suffix)]
#![allow(clippy::missing_inline_in_public_items)]
#![allow(clippy::exhaustive_enums)]
#![allow(clippy::exhaustive_structs)]
#![allow(clippy::self_named_module_files)]
#![allow(clippy::multiple_inherent_impl)]
#![allow(clippy::partial_pub_fields)]
#![allow(clippy::default_numeric_fallback)]
#![allow(clippy::blanket_clippy_restriction_lints)]
#![allow(clippy::std_instead_of_core)]
#![allow(clippy::multiple_unsafe_ops_per_block)]
#![allow(clippy::single_char_lifetime_names)]
#![allow(clippy::missing_trait_methods)]
#![allow(clippy::as_conversions)]
#![allow(clippy::shadow_unrelated)]
#![allow(clippy::unwrap_in_result)]
#![allow(clippy::pub_use)]
#![allow(clippy::arithmetic_side_effects)]

//! ciscoconfrs renders a structured, strongly typed cisco ios router configuration into the exact
//! line oriented configuration text the device accepts.

/// Codecs are the small pure conversions the renderer is built on.
pub mod codec {
    /// Prefix length to subnet/wildcard mask conversion.
    pub mod mask;

    /// The (closed, lookup table) type 5/type 7 credential encoder.
    pub mod credential;
}

/// The device data model -- everything a `DeviceConfig` is made of, plus a builder for it.
pub mod device {
    /// The `DeviceConfig` tree and all of its parts.
    pub mod config;

    /// The absent/defaulted/valued tri-state used for presence gated directives.
    pub mod presence;

    /// A chained builder for `DeviceConfig` objects.
    pub mod builder;

    /// The device config re-exported for convenience.
    pub use crate::device::config::DeviceConfig;

    /// The device config builder re-exported for convenience.
    pub use crate::device::builder::Builder as DeviceConfigBuilder;
}

/// Ciscoconfrs errors.
pub mod errors;

/// Module responsible for writing rendered configs to disk.
pub mod export;

/// The renderer -- turns a `DeviceConfig` into ios configuration text.
pub mod render {
    /// Default values and literal lines used while rendering.
    pub mod constants;

    /// Document assembly, owns the fixed section order.
    pub mod document;

    /// Console/aux/vty line stanzas.
    pub mod line;

    /// Per item stanzas: interfaces, routes, ospf and users.
    pub mod stanza;

    /// The top level render function re-exported for convenience.
    pub use crate::render::document::render_config;
}

/// Module responsible for loading device configs from yaml, files, or the embedded templates.
pub mod templates;

/// Ciscoconfrs utilities.
pub mod util {
    /// Compiled (once) validation patterns.
    pub(crate) mod patterns;
}
