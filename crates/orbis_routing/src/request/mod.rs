pub mod builder;
pub mod locations;
pub mod params;
pub mod section_type;
pub mod supporting_data;
