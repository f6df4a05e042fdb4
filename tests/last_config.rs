//
//  gh-rest
//  tests/last_config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

// The last configuration is process-wide, so this file holds a single test.

use std::time::Duration;

use gh_rest::api::{ApiError, GitHubClient};

#[test]
fn test_from_last_requires_a_previous_client() {
    assert!(matches!(
        GitHubClient::from_last(),
        Err(ApiError::Configuration(_))
    ));

    GitHubClient::with_error_message_and_timeout(
        "abc123",
        "GitHub request failed",
        Duration::from_secs(5),
    )
    .unwrap();

    let again = GitHubClient::from_last().unwrap();
    assert_eq!(again.credentials().token(), "abc123");
    assert_eq!(again.credentials().error_message(), Some("GitHub request failed"));
    assert_eq!(again.credentials().timeout(), Some(Duration::from_secs(5)));
    assert_eq!(again.base_url(), "https://api.github.com");

    // A rejected token does not replace the last configuration
    assert!(GitHubClient::new("  ").is_err());
    assert_eq!(
        GitHubClient::from_last().unwrap().credentials().token(),
        "abc123"
    );
}
