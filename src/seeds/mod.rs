pub mod shoe_catalog_seed;
