// Utility modules for the line splicer
pub mod fs;
