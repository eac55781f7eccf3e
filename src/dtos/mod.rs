pub mod surfactant;
