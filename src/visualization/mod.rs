pub mod solar_vis3d;
