pub mod thyroid_mwa;
