#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::process::{Command, Output};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CliTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for CliTestContext {
        fn setup() -> Self {
            CliTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl CliTestContext {
        fn run(&self, args: &[&str]) -> Output {
            Command::new(env!("CARGO_BIN_EXE_cabroster"))
                .args(args)
                .current_dir(self.temp_dir.path())
                .env("HOME", self.temp_dir.path())
                .env("LOCALAPPDATA", self.temp_dir.path())
                .env_remove("RUST_LOG")
                .env_remove("CABROSTER_DEBUG")
                .output()
                .unwrap()
        }

        fn path(&self, name: &str) -> String {
            self.temp_dir.path().join(name).display().to_string()
        }
    }

    #[test_context(CliTestContext)]
    #[test]
    fn test_generate_writes_default_file(ctx: &mut CliTestContext) {
        let output = ctx.run(&[
            "generate", "--ids", "E1", "--from", "2024-01-01", "--to", "2024-01-03", "--login", "22:30", "--logout", "08:00",
            "--next-day-logout",
        ]);
        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

        let content = std::fs::read_to_string(Path::new(&ctx.path("moveinsync_schedule.csv"))).unwrap();
        assert_eq!(content.lines().count(), 5);
        assert!(content.ends_with("E1,,08:00,,,4/1/2024,ADD\n"));
    }

    #[test_context(CliTestContext)]
    #[test]
    fn test_generate_to_stdout_reads_ids_file(ctx: &mut CliTestContext) {
        let ids = ctx.path("ids.txt");
        std::fs::write(&ids, "E1\n\n  E2  \n").unwrap();

        let output = ctx.run(&[
            "generate", "--ids-file", &ids, "--from", "5/1/2024", "--to", "8/1/2024", "--skip", "sat,sun", "--edit-type", "delete",
            "--output", "-",
        ]);
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "E1,22:30,08:00,,,5/1/2024,DELETE");
        assert_eq!(lines[4], "E2,22:30,08:00,,,8/1/2024,DELETE");
    }

    #[test_context(CliTestContext)]
    #[test]
    fn test_invalid_date_fails_without_output(ctx: &mut CliTestContext) {
        let target = ctx.path("bad.csv");
        let output = ctx.run(&["generate", "--ids", "E1", "--from", "2024-13-01", "--to", "2024-01-03", "--output", &target]);

        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid date '2024-13-01'"));
        assert!(!Path::new(&target).exists());
    }

    #[test_context(CliTestContext)]
    #[test]
    fn test_empty_roster_writes_header_only(ctx: &mut CliTestContext) {
        let output = ctx.run(&["generate", "--from", "2024-01-01", "--to", "2024-01-31", "--output", "-"]);
        assert!(output.status.success());
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            "EmployeeId,LogIn,LogOut,LogInVenue,LogOutVenue,ShiftDate,EditType\n"
        );
    }

    #[test_context(CliTestContext)]
    #[test]
    fn test_preview_prints_table_without_writing(ctx: &mut CliTestContext) {
        let output = ctx.run(&[
            "preview", "--ids", "E1", "--from", "2024-01-01", "--to", "2024-01-03", "--login", "22:30", "--logout", "08:00",
            "--next-day-logout",
        ]);
        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("Shift rows from 2024-01-01 to 2024-01-03"));
        assert!(stdout.lines().any(|line| line.contains("EmployeeId") && line.contains("EditType")));
        assert_eq!(stdout.lines().filter(|line| line.starts_with("| E1 ")).count(), 4);
        assert!(stdout.contains("4 row(s)"));
        assert!(!Path::new(&ctx.path("moveinsync_schedule.csv")).exists());
    }
}
