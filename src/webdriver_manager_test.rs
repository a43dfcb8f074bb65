#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_command_exists() {
        #[cfg(unix)]
        {
            assert!(WebDriverManager::command_exists("ls"));
            assert!(!WebDriverManager::command_exists(
                "nonexistent_command_12345"
            ));
        }

        #[cfg(windows)]
        {
            assert!(WebDriverManager::command_exists("cmd"));
            assert!(!WebDriverManager::command_exists(
                "nonexistent_command_12345"
            ));
        }
    }

    #[test]
    fn test_find_free_port() {
        let port =
            WebDriverManager::find_free_port_for_browser(&crate::webdriver::BrowserType::Firefox)
                .unwrap();
        assert!(port > 0);
    }

    #[test]
    fn test_is_port_in_use() {
        // Bind to a port and check it's in use
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        assert!(WebDriverManager::is_port_in_use(port));
    }

    #[tokio::test]
    async fn test_is_driver_ready_when_nothing_listens() {
        assert!(!WebDriverManager::is_driver_ready("http://localhost:65432").await);
    }

    #[test]
    fn test_stop_all_empty() {
        let manager = WebDriverManager::new();
        // Should not panic even with no processes
        manager.stop_all();
    }
}
