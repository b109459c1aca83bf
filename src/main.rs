use stipple::{Effect, ImageSource};

fn main() {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: stipple <image>");
        std::process::exit(2);
    };

    if let Err(err) = Effect::new(ImageSource::from_path(&path)).run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
