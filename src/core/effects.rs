//! # Effects
//!
//! The I/O half of the controller. `update()` decides *what* should happen;
//! `perform()` talks to the backend and turns the outcome into the next
//! [`Action`] to feed back into `update()`.

use log::debug;

use crate::api::Backend;
use crate::core::action::{Action, Effect};

/// Runs the network call an effect asks for.
///
/// Returns `None` for effects with no I/O (`None`, `Quit`).
pub async fn perform(backend: &dyn Backend, effect: Effect) -> Option<Action> {
    match effect {
        Effect::CheckHealth => {
            let ok = backend.check_health().await;
            Some(Action::HealthChecked(ok))
        }
        Effect::Query(text) => {
            debug!("Performing query ({} bytes)", text.len());
            Some(match backend.query_agent(&text).await {
                Ok(response) => Action::QueryResolved(response),
                Err(e) => Action::QueryFailed(e),
            })
        }
        Effect::None | Effect::Quit => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Issue, QueryResponse, Repository};
    use crate::core::action::{BACKEND_HINT, HEALTH_WARNING, update};
    use crate::core::message::Sender;
    use crate::core::state::{App, Connectivity};
    use crate::test_support::{ScriptedBackend, test_app};

    /// Feeds an action through update and keeps performing effects until
    /// the controller settles.
    async fn dispatch(app: &mut App, backend: &ScriptedBackend, action: Action) {
        let mut next = Some(action);
        while let Some(action) = next.take() {
            let effect = update(app, action);
            next = perform(backend, effect).await;
        }
    }

    fn repo_with_issues(name: &str, issues: usize) -> Repository {
        Repository {
            name: name.to_string(),
            url: format!("https://github.com/example/{name}"),
            description: "d".to_string(),
            language: "Rust".to_string(),
            stars: 42,
            difficulty: "Intermediate".to_string(),
            good_first_issues: (0..issues)
                .map(|i| Issue {
                    title: format!("{name} issue {i}"),
                    url: format!("https://github.com/example/{name}/issues/{i}"),
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_blank_submission_never_calls_backend() {
        let backend = ScriptedBackend::healthy();
        let mut app = test_app();

        dispatch(&mut app, &backend, Action::Submit("   ".into())).await;

        assert_eq!(backend.query_calls(), 0);
        assert_eq!(app.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_unhealthy_backend_on_mount_warns_once() {
        let backend = ScriptedBackend::unhealthy();
        let mut app = test_app();

        dispatch(&mut app, &backend, Action::Mount).await;

        let log = app.messages.as_slice();
        assert_eq!(backend.health_calls(), 1);
        assert_eq!(log.len(), 2);
        assert_eq!(log[1].sender, Sender::Bot);
        assert_eq!(log[1].text.as_deref(), Some(HEALTH_WARNING));
        assert!(log[0].id < log[1].id);
        assert_eq!(app.connectivity, Connectivity::Disconnected);
    }

    #[tokio::test]
    async fn test_fetch_failure_explains_unreachable_backend() {
        let backend = ScriptedBackend::healthy()
            .with_reply(Err(ApiError::Transport("fetch failed".into())));
        let mut app = test_app();

        dispatch(&mut app, &backend, Action::Submit("find me something".into())).await;

        let last = app.messages.last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert!(last.text.as_deref().unwrap().contains(BACKEND_HINT));
        assert_eq!(app.connectivity, Connectivity::Disconnected);
        assert!(!app.is_loading());
    }

    #[tokio::test]
    async fn test_beginner_python_scenario() {
        let backend = ScriptedBackend::healthy().with_reply(Ok(QueryResponse {
            message: Some("Found 1 project".into()),
            recommendations: vec![Repository {
                name: "foo".into(),
                url: "https://x".into(),
                description: "d".into(),
                language: "Python".into(),
                stars: 10,
                difficulty: "Beginner".into(),
                good_first_issues: vec![],
            }],
            agent_id: None,
        }));
        let mut app = test_app();

        dispatch(&mut app, &backend, Action::Submit("Find me a beginner Python project".into())).await;

        let log = app.messages.as_slice();
        assert_eq!(log.len(), 3);
        assert_eq!(log[1].text.as_deref(), Some("Find me a beginner Python project"));
        assert_eq!(log[2].text.as_deref(), Some("Found 1 project"));
        assert_eq!(log[2].repositories.len(), 1);
        assert_eq!(log[2].repositories[0].difficulty_level().label(), "Beginner");
        assert!(log[2].repositories[0].visible_issues().is_empty());
        assert_eq!(backend.last_query().as_deref(), Some("Find me a beginner Python project"));
    }

    #[tokio::test]
    async fn test_every_settled_request_has_exactly_one_reply() {
        let backend = ScriptedBackend::healthy()
            .with_reply(Ok(QueryResponse {
                message: None,
                recommendations: vec![repo_with_issues("a", 5), repo_with_issues("b", 5)],
                agent_id: None,
            }))
            .with_reply(Err(ApiError::Timeout("deadline".into())))
            .with_reply(Err(ApiError::Status {
                status: 500,
                body: "oops".into(),
            }));
        let mut app = test_app();

        for query in ["one", "two", "three"] {
            let before = app.messages.len();
            dispatch(&mut app, &backend, Action::Submit(query.into())).await;

            let log = app.messages.as_slice();
            assert_eq!(log.len(), before + 2, "user message + one reply");
            assert_eq!(log[log.len() - 1].sender, Sender::Bot);
            assert!(!app.messages.has_loading());
        }

        let ids: Vec<u64> = app.messages.iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(backend.query_calls(), 3);
    }

    #[tokio::test]
    async fn test_perform_none_and_quit_do_no_io() {
        let backend = ScriptedBackend::healthy();
        assert!(perform(&backend, Effect::None).await.is_none());
        assert!(perform(&backend, Effect::Quit).await.is_none());
        assert_eq!(backend.health_calls(), 0);
        assert_eq!(backend.query_calls(), 0);
    }
}
