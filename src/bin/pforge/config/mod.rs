mod forge;

pub use forge::build_forge_config;
