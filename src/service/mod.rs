pub mod counter;
pub mod seeder;
