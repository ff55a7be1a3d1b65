// Error codes implementation
// This module contains stable error codes for pruning failures

pub mod pruning {
    pub const DEPTH_EXCEEDED: &str = "PRUNE_1001";
}

pub mod serialization {
    pub const ENCODE_FAILED: &str = "PRUNE_2001";
}

pub mod configuration {
    pub const INVALID_CONFIG: &str = "CONFIG_3001";
}

pub mod internal {
    pub const UNEXPECTED: &str = "INTERNAL_9001";
}
