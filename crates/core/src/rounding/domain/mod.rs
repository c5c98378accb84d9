pub mod corner_mask;
pub mod corner_rounder;
pub mod surface;
