mod registry_emitter;

pub use registry_emitter::RegistryEmitter;
