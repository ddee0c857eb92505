pub mod requisite;
