use yaslc_drv::{parse_args, run};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {}", message);
            std::process::exit(1);
        },
    };
    if let Err(e) = run(&config) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
