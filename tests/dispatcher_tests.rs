use brokerme::dispatcher::{dispatch, Response};
use brokerme::tree::{MenuAction, MenuError, TreeError};

mod helpers;
use helpers::{args, setup_app, write_file};

fn text(response: Result<Response, String>) -> String {
    match response {
        Ok(Response::Text(text)) => text,
        other => panic!("expected text, got {:?}", other),
    }
}

mod features {
    use super::*;

    #[test]
    fn test_expand_root_and_groups() {
        let (app, _tmp) = setup_app();

        let servers = text(dispatch(args("TREE.EXPAND"), &app));
        assert_eq!(
            servers.lines().collect::<Vec<_>>(),
            [
                "[0] localhost (tcp://localhost:61616)",
                "[1] www.bekwam.com (tcp://www.bekwam.com:61616)",
                "[2] www.bekwam.net (tcp://www.bekwam.net:61616)",
            ]
        );

        let groups = text(dispatch(args("tree.expand 0"), &app));
        assert_eq!(groups, "[0/0] Queues\n[0/1] Topics");
    }

    #[test]
    fn test_expand_leaf_is_empty() {
        let (app, _tmp) = setup_app();
        assert_eq!(text(dispatch(args("TREE.EXPAND 0/0/0"), &app)), "");
    }

    #[test]
    fn test_expand_bad_path_is_error() {
        let (app, _tmp) = setup_app();
        let err = dispatch(args("TREE.EXPAND 7"), &app).unwrap_err();
        assert!(err.contains("no child 7"), "got {}", err);
    }

    #[test]
    fn test_menu_lists_actions() {
        let (app, _tmp) = setup_app();
        assert_eq!(text(dispatch(args("TREE.MENU"), &app)), "Add Server");
        assert_eq!(
            text(dispatch(args("TREE.MENU 1/1/0"), &app)),
            "Subscribe\nRename\nDelete"
        );
    }

    #[test]
    fn test_invoke_is_inert() {
        let (app, _tmp) = setup_app();
        let before = app.snapshot().render();

        let err = dispatch(args("TREE.INVOKE 0 Delete"), &app).unwrap_err();
        assert!(err.contains("not implemented"), "got {}", err);

        let err = dispatch(args("TREE.INVOKE 0/0 Add Topic"), &app).unwrap_err();
        assert!(err.contains("not offered"), "got {}", err);

        assert_eq!(app.snapshot().render(), before);
    }

    #[test]
    fn test_save_and_exit() {
        let (app, tmp) = setup_app();

        let saved = text(dispatch(args("FILE.SAVE"), &app));
        assert!(saved.ends_with("myservers.json"));
        assert!(tmp.path().join("myservers.json").exists());

        assert_eq!(dispatch(args("exit"), &app), Ok(Response::Exit));
    }

    #[tokio::test]
    async fn test_open_then_status() {
        let (app, tmp) = setup_app();
        let path = write_file(&tmp, "servers.json", "[]");

        let started = text(dispatch(vec!["FILE.OPEN".to_string(), path.display().to_string()], &app));
        assert_eq!(started, "Loading file");

        // Wait for the background load to land in the status bar
        for _ in 0..100 {
            if app.status().progress >= 1.0 {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        assert_eq!(text(dispatch(args("STATUS"), &app)), "File loaded [100%]");
    }

    #[test]
    fn test_show_prints_whole_tree() {
        let (app, _tmp) = setup_app();
        let tree = text(dispatch(args("TREE.SHOW"), &app));
        let lines: Vec<&str> = tree.lines().collect();

        // root + 3 servers + 6 groups + 14 endpoints
        assert_eq!(lines.len(), 24);
        assert_eq!(lines[0], "Servers - myservers.json");
        assert_eq!(lines[23], "      topicA TOPIC");
    }

    #[test]
    fn test_save_as_renames_root() {
        let (app, tmp) = setup_app();
        let target = tmp.path().join("prod.json");

        let saved = text(dispatch(vec!["FILE.SAVEAS".to_string(), target.display().to_string()], &app));
        assert!(saved.ends_with("prod.json"), "got {}", saved);
        assert!(target.exists());

        let tree = text(dispatch(args("TREE.SHOW"), &app));
        assert_eq!(tree.lines().next(), Some("Servers - prod.json"));
    }

    #[test]
    fn test_help_lists_commands() {
        let (app, _tmp) = setup_app();
        let help = text(dispatch(args("help"), &app));
        for command in ["FILE.OPEN", "FILE.SAVEAS", "TREE.SHOW", "TREE.INVOKE", "STATUS"] {
            assert!(help.contains(command), "{} missing from help", command);
        }
    }

    #[tokio::test]
    async fn test_open_rejects_wrong_extension() {
        let (app, tmp) = setup_app();
        let path = write_file(&tmp, "servers.xml", "[]");

        let err = dispatch(vec!["FILE.OPEN".to_string(), path.display().to_string()], &app).unwrap_err();
        assert!(err.contains("Broker Me Files (*.json)"), "got {}", err);
        assert_eq!(text(dispatch(args("STATUS"), &app)), " [0%]");
    }

    #[test]
    fn test_invoke_on_missing_node_is_tree_error() {
        let (app, _tmp) = setup_app();
        assert_eq!(
            app.invoke("9", MenuAction::Rename),
            Err(MenuError::Tree(TreeError::NoSuchChild { parent: String::new(), index: 9 }))
        );
    }
}
