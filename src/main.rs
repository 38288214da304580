use heartburst::Greeting;

fn main() {
    if let Err(e) = Greeting::new().run() {
        eprintln!("heartburst failed: {}", e);
        std::process::exit(1);
    }
}
