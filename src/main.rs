mod cli;
mod context;
mod doctor;
mod hook;
mod webapp;

fn main() {
    cli::run();
}
