use arglist::ArgumentListBuilder;

#[test]
fn golden_case_escapes_every_special_class() {
    let mut b = ArgumentListBuilder::new();
    b.add("-Dfoo=*abc?def;ghi^jkl&mno<pqr>stu|vwx\"yz%end");

    let cmd = b.to_windows_command();
    assert_eq!(
        cmd.to_args(),
        vec![
            "cmd.exe".to_string(),
            "/C".to_string(),
            "\"\"-Dfoo=*abc?def;ghi^^jkl^&mno^<pqr^>stu^|vwx\"\"yz%\"e\"nd\" \
             && exit %%ERRORLEVEL%%\""
                .to_string(),
        ]
    );
}

#[test]
fn plain_arguments_pass_through_unescaped() {
    let mut b = ArgumentListBuilder::new();
    b.add("java").add("-jar").add("app.jar");

    let args = b.to_windows_command().to_args();
    assert_eq!(args[0], "cmd.exe");
    assert_eq!(args[1], "/C");
    assert_eq!(args[2], "\"java -jar app.jar && exit %%ERRORLEVEL%%\"");
}

#[test]
fn argument_with_space_is_quoted_from_the_start() {
    let mut b = ArgumentListBuilder::new();
    b.add("C:\\Program Files\\tool.exe");

    let args = b.to_windows_command().to_args();
    assert_eq!(args[2], "\"\"C:\\Program Files\\tool.exe\" && exit %%ERRORLEVEL%%\"");
}

#[test]
fn percent_variable_reference_cannot_expand() {
    let mut b = ArgumentListBuilder::new();
    b.add("%foo%");

    let args = b.to_windows_command().to_args();
    assert_eq!(args[2], "\"\"%\"f\"oo%\" && exit %%ERRORLEVEL%%\"");
}

#[test]
fn empty_builder_still_propagates_exit_code() {
    let b = ArgumentListBuilder::new();
    let args = b.to_windows_command().to_args();
    assert_eq!(args, vec!["cmd.exe", "/C", "\"&& exit %%ERRORLEVEL%%\""]);
}

#[test]
fn output_builder_carries_no_mask() {
    let mut b = ArgumentListBuilder::new();
    b.add("login").add_masked("s3cret");
    assert!(b.has_masked());

    let cmd = b.to_windows_command();
    assert!(!cmd.has_masked());
    assert_eq!(cmd.to_mask_array(), vec![false, false, false]);
}

#[test]
fn each_argument_escaped_independently() {
    let mut b = ArgumentListBuilder::new();
    b.add("echo").add("a&b").add("done");

    let args = b.to_windows_command().to_args();
    assert_eq!(args[2], "\"echo \"a^&b\" done && exit %%ERRORLEVEL%%\"");
}
