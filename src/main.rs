use vsharp::cli;

fn main() {
    cli::run();
}
