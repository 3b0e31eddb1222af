pub mod prefabs;
