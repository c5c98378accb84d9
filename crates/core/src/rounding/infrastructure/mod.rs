pub mod circular_corner_rounder;
