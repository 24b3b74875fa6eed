pub mod generate_interview;
