//! End-to-end integration tests
//!
//! These tests drive complete interactive sessions through the public API:
//! 1. Load the profile from tests/fixtures/test_person.json
//! 2. Run a scripted command sequence through the prompt
//! 3. Stop the background workers
//! 4. Check the transcript and the final balance
//!
//! Each scenario is run twice: once without background traffic and once with
//! fast depositor/withdrawer tasks hitting the same account.

#[cfg(test)]
mod tests {
    use bank_client::cli::{run_session, CliArgs};
    use bank_client::{Account, BankClient, BankError};
    use clap::Parser;
    use rstest::rstest;
    use std::sync::Arc;

    const PROFILE: &str = "tests/fixtures/test_person.json";

    fn args(load: bool, initial_balance: i64) -> CliArgs {
        let balance = initial_balance.to_string();
        let mut argv = vec![
            "bank-cli",
            "--profile",
            PROFILE,
            "--initial-balance",
            balance.as_str(),
            "--worker-threads",
            "2",
        ];
        if load {
            argv.extend_from_slice(&["--min-delay-ms", "0", "--max-delay-ms", "2"]);
        } else {
            argv.push("--no-load");
        }
        CliArgs::try_parse_from(argv).expect("valid arguments")
    }

    /// Run a script and return (transcript, final balance minus background net)
    fn run_script(script: &str, load: bool, initial_balance: i64) -> (String, i64) {
        let args = args(load, initial_balance);
        let mut output = Vec::new();

        let summary = run_session(&args, script.as_bytes(), &mut output)
            .unwrap_or_else(|e| panic!("Session failed: {}", e));

        let transcript = String::from_utf8(output).expect("utf-8 output");
        (transcript, summary.final_balance - summary.load.net())
    }

    #[rstest]
    #[case::deposits_and_withdrawal(
        "deposit\n100\ndeposit\n42\nwithdrawal\n5\nexit\n",
        0,
        137
    )]
    #[case::overdraft_rejected("withdrawal\n1000000\nexit\n", 100, 100)]
    #[case::negative_deposit_rejected("deposit\n-5\nexit\n", 30, 30)]
    #[case::zero_amounts("deposit\n0\nwithdraw\n0\nexit\n", 7, 7)]
    #[case::garbage_amount("deposit\nabc\ndeposit\n10\nexit\n", 0, 10)]
    #[case::input_ends_without_exit("deposit\n25\n", 0, 25)]
    fn test_scripted_sessions(
        #[case] script: &str,
        #[case] initial_balance: i64,
        #[case] expected_prompt_net: i64,
        #[values(false, true)] load: bool,
    ) {
        let (transcript, prompt_balance) = run_script(script, load, initial_balance);

        assert!(transcript.starts_with("Account: John Doe [id:"));
        assert!(transcript.ends_with("Bye!\n"));
        assert_eq!(
            prompt_balance, expected_prompt_net,
            "\n\nTranscript (load: {}):\n{}\n",
            load, transcript
        );
    }

    #[test]
    fn test_transcript_without_load() {
        let (transcript, _) = run_script(
            "balance\ndeposit\n100\nwithdrawal\n150\nfly\nexit\n",
            false,
            0,
        );

        let lines: Vec<&str> = transcript.lines().collect();
        assert_eq!(lines[1], "Supported commands: balance, deposit, withdrawal, exit");
        assert_eq!(lines[2], "0");
        assert_eq!(
            lines[3],
            "Enter a value to deposit: Successful operation. Balance: 100"
        );
        assert_eq!(
            lines[4],
            "Enter a value to withdraw: balance 100 is less than withdrawal amount 150"
        );
        assert_eq!(
            lines[5],
            "Unsupported command. You can use commands: balance, deposit, withdrawal, exit"
        );
        assert_eq!(lines[6], "Bye!");
    }

    #[test]
    fn test_invalid_utf8_line_keeps_session_alive() {
        let args = args(false, 0);
        let mut script = b"deposit\n10\n".to_vec();
        script.extend_from_slice(&[0xff, 0xfe, b'\n']);
        script.extend_from_slice(b"deposit\n5\nexit\n");
        let mut output = Vec::new();

        let summary = run_session(&args, script.as_slice(), &mut output)
            .unwrap_or_else(|e| panic!("Session failed: {}", e));

        let transcript = String::from_utf8(output).expect("utf-8 output");
        assert!(transcript.contains(
            "Unsupported command. You can use commands: balance, deposit, withdrawal, exit"
        ));
        assert!(transcript.ends_with("Bye!\n"));
        assert_eq!(summary.final_balance, 15);
    }

    #[test]
    fn test_missing_profile_is_fatal() {
        let args = CliArgs::try_parse_from(["bank-cli", "--profile", "tests/fixtures/nope.json"])
            .expect("valid arguments");
        let mut output = Vec::new();

        let err = run_session(&args, "exit\n".as_bytes(), &mut output).unwrap_err();

        assert!(err.contains("tests/fixtures/nope.json"));
    }

    #[test]
    fn test_shared_account_under_thread_contention() {
        let account = Arc::new(Account::new(10_000));

        std::thread::scope(|s| {
            for _ in 0..16 {
                let account = Arc::clone(&account);
                s.spawn(move || {
                    for _ in 0..500 {
                        account.deposit(2).unwrap();
                        match account.withdraw(3) {
                            Ok(()) | Err(BankError::InsufficientFunds { .. }) => {}
                            Err(e) => panic!("unexpected error: {}", e),
                        }
                    }
                });
            }
        });

        // Every withdrawal of 3 is covered: the balance only falls by 1 per
        // iteration and starts at 10_000 > 16 * 500.
        assert_eq!(account.balance(), 10_000 - 16 * 500);
    }
}
