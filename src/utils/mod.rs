pub mod cylinder;
