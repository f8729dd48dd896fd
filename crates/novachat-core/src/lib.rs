pub mod event_bus;
pub mod ports;
pub mod settings;
pub mod store;

#[cfg(test)]
mod tests;
