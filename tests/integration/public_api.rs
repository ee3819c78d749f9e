use crate::helpers::serve_starter_kit;

use astro_starter::{generate, AppArgs};

#[test]
fn it_allows_generate_call_with_public_args_and_returns_the_generated_path() {
    let cwd_before = std::env::current_dir().unwrap();

    let (_server, dir) = serve_starter_kit();
    let destination = dir.path().join("myapp");

    let args_exposed = AppArgs {
        directory: Some(destination.display().to_string()),
        noinstall: true,
        yarn: false,
        npm: false,
        config: Some(dir.config_path()),
        verbose: true,
    };

    assert_eq!(
        generate(args_exposed).expect("cannot generate project"),
        destination
    );
    assert!(std::fs::read_to_string(destination.join("src").join("App.js"))
        .expect("cannot read file")
        .contains("App"));

    let cwd_after = std::env::current_dir().unwrap();
    assert!(cwd_after == cwd_before);
}
