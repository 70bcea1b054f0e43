pub mod quicksim;
