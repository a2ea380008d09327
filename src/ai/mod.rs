mod agent;
mod first_legal;

pub use agent::Agent;
pub use first_legal::FirstLegalAgent;
