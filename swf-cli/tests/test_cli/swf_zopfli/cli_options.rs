use crate::add_test;
use crate::common::{fws, repetitive_body, Fixture, SAMPLE_BODY};

// Test that -h prints usage and processes nothing
add_test!(help_skips_processing, async {
    const FILE_NAME: &str = "movie.swf";

    let fixture = Fixture::with_file(FILE_NAME, &fws(6, &SAMPLE_BODY));

    let output = fixture.run_cargo(&["-h", &fixture.path(FILE_NAME)]).await;
    assert!(output.status.success());
    assert!(output.stdout.contains("Usage"), "{}", output.stdout);
    assert!(output.stdout.contains("--i1000"));
    assert!(!fixture.file_exists("movie.swf.zopfli"));
});

// Test running without any file names
add_test!(no_files_prints_hint, async {
    let fixture = Fixture::with_files(&[], &[]);

    let output = fixture.run_cargo(&["-v"]).await;
    assert!(output.status.success());
    assert!(output.stderr.contains("Please provide filename"));
    assert!(output.stderr.contains("swf-zopfli -h"));
});

// Test verbose output
add_test!(verbose_reports_progress, async {
    const FILE_NAME: &str = "movie.swf";

    let fixture = Fixture::with_file(FILE_NAME, &fws(6, &repetitive_body(1024)));
    let file_path = fixture.path(FILE_NAME);

    let output = fixture.run_cargo(&["-v", "--i5", &file_path]).await;
    assert!(output.status.success());
    assert!(output
        .stderr
        .contains(&format!("Saving to: {}", fixture.output_path(FILE_NAME))));
    assert!(output.stderr.contains("Original Size: 1024"));
    assert!(output.stderr.contains("Recompressed"));
});

// Test that every effort preset yields a valid file with the same content
add_test!(effort_presets_preserve_content, async {
    const FILE_NAME: &str = "movie.swf";

    let body = repetitive_body(2048);
    let input = fws(6, &body);
    let fixture = Fixture::with_file(FILE_NAME, &input);

    for preset in ["--i5", "--i10", "--i15", "--i25"] {
        let output = fixture.run_cargo(&[preset, &fixture.path(FILE_NAME)]).await;
        assert!(output.status.success(), "{preset}: {}", output.stderr);
        fixture.assert_recompressed(FILE_NAME, &input, &body);
    }
});

// Test a custom output suffix
add_test!(custom_suffix, async {
    const FILE_NAME: &str = "movie.swf";

    let input = fws(6, &SAMPLE_BODY);
    let fixture = Fixture::with_file(FILE_NAME, &input);

    let output = fixture
        .run_cargo(&["--i5", "-S", ".min", &fixture.path(FILE_NAME)])
        .await;
    assert!(output.status.success());
    assert_eq!(fixture.entries(), ["movie.swf", "movie.swf.min"]);
});

// Test that an empty suffix is refused instead of overwriting the input
add_test!(empty_suffix_refused, async {
    const FILE_NAME: &str = "movie.swf";

    let input = fws(6, &SAMPLE_BODY);
    let fixture = Fixture::with_file(FILE_NAME, &input);

    let output = fixture
        .run_cargo(&["--suffix=", &fixture.path(FILE_NAME)])
        .await;
    assert!(output.status.success());
    assert!(output.stderr.contains("suffix must not be empty"));
    fixture.assert_files(&[FILE_NAME], &[&input]);
});

// Test that argument errors are reported without a failing exit status
add_test!(conflicting_presets_exit_successfully, async {
    const FILE_NAME: &str = "movie.swf";

    let fixture = Fixture::with_file(FILE_NAME, &fws(6, &SAMPLE_BODY));

    let output = fixture
        .run_cargo(&["--i5", "--i50", &fixture.path(FILE_NAME)])
        .await;
    assert!(output.status.success());
    assert!(!output.stderr.is_empty());
    assert!(!fixture.file_exists("movie.swf.zopfli"));
    assert!(fixture.root_dir_path().is_dir());
});

// Test that unknown options are skipped and the files are still processed
add_test!(unknown_options_are_ignored, async {
    const FILE_NAME: &str = "movie.swf";

    let input = fws(6, &SAMPLE_BODY);
    let fixture = Fixture::with_file(FILE_NAME, &input);

    let output = fixture
        .run_cargo(&["-x", "--i5", "--fast", &fixture.path(FILE_NAME)])
        .await;
    assert!(output.status.success());
    assert!(!output.stderr.contains("error"), "{}", output.stderr);
    fixture.assert_recompressed(FILE_NAME, &input, &SAMPLE_BODY);
});

// Test that verbose mode writes the same bytes as quiet mode
add_test!(verbose_output_matches_quiet_output, async {
    let input = fws(6, &repetitive_body(4096));
    let fixture = Fixture::with_files(&["quiet.swf", "loud.swf"], &[&input, &input]);

    let quiet = fixture.run_cargo(&["--i5", &fixture.path("quiet.swf")]).await;
    let loud = fixture
        .run_cargo(&["-v", "--i5", &fixture.path("loud.swf")])
        .await;
    assert!(quiet.status.success() && loud.status.success());
    assert!(!quiet.stderr.contains("Original Size"));
    assert!(loud.stderr.contains("Original Size: 4096"));

    assert_eq!(
        fixture.read("quiet.swf.zopfli"),
        fixture.read("loud.swf.zopfli")
    );
});
