use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::humanizer::errors::HumanizeError;
use crate::domain::humanizer::model::HumanizedContent;
use crate::domain::humanizer::prompt::build_humanize_prompt;
use crate::domain::humanizer::services::ContentRewriterService;
use crate::domain::humanizer::use_cases::humanize::{
    HumanizeContentParams, HumanizeContentUseCase,
};
use crate::domain::logger::Logger;

pub struct HumanizeContentUseCaseImpl {
    /// `None` when no provider credential was configured.
    pub rewriter: Option<Arc<dyn ContentRewriterService>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl HumanizeContentUseCase for HumanizeContentUseCaseImpl {
    async fn execute(
        &self,
        params: HumanizeContentParams,
    ) -> Result<HumanizedContent, HumanizeError> {
        let Some(rewriter) = &self.rewriter else {
            self.logger
                .warn("Humanize request rejected: provider credential is not configured");
            return Err(HumanizeError::MissingCredential);
        };

        if params.text.trim().is_empty() {
            self.logger.debug("Humanize request rejected: empty input");
            return Err(HumanizeError::EmptyInput);
        }

        self.logger.info(&format!(
            "Humanizing content ({} chars)",
            params.text.chars().count()
        ));

        let prompt = build_humanize_prompt(&params.text);

        match rewriter.rewrite(&prompt).await {
            Ok(content) => {
                self.logger.info(&format!(
                    "Humanized content generated ({} chars)",
                    content.as_str().chars().count()
                ));
                Ok(content)
            }
            Err(err) => {
                self.logger.error(&format!("Humanize failed: {}", err));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::humanizer::model::{HumanizePrompt, Role};
    use crate::domain::humanizer::prompt::SYSTEM_PROMPT;
    use mockall::mock;
    use proptest::prelude::*;

    mock! {
        pub ContentRewriter {}

        #[async_trait]
        impl ContentRewriterService for ContentRewriter {
            async fn rewrite(
                &self,
                prompt: &HumanizePrompt,
            ) -> Result<HumanizedContent, HumanizeError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case_with(rewriter: MockContentRewriter) -> HumanizeContentUseCaseImpl {
        HumanizeContentUseCaseImpl {
            rewriter: Some(Arc::new(rewriter)),
            logger: mock_logger(),
        }
    }

    fn params(text: &str) -> HumanizeContentParams {
        HumanizeContentParams {
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn should_return_rewriter_content_unmodified() {
        let mut mock_rewriter = MockContentRewriter::new();
        mock_rewriter
            .expect_rewrite()
            .times(1)
            .returning(|_| Ok(HumanizedContent::new("Here's a friendlier version...")));

        let use_case = use_case_with(mock_rewriter);

        let result = use_case.execute(params("Technical report text.")).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "Here's a friendlier version...");
    }

    #[tokio::test]
    async fn should_send_system_prompt_and_raw_input() {
        let raw = "  Technical report text.\n";
        let mut mock_rewriter = MockContentRewriter::new();
        mock_rewriter
            .expect_rewrite()
            .withf(move |prompt| {
                prompt.messages().len() == 2
                    && prompt.system().role == Role::System
                    && prompt.system().content == SYSTEM_PROMPT
                    && prompt.human().role == Role::Human
                    && prompt.human().content == raw
            })
            .times(1)
            .returning(|_| Ok(HumanizedContent::new("ok")));

        let use_case = use_case_with(mock_rewriter);

        let result = use_case.execute(params(raw)).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_empty_input_without_calling_rewriter() {
        let mut mock_rewriter = MockContentRewriter::new();
        mock_rewriter.expect_rewrite().times(0);

        let use_case = use_case_with(mock_rewriter);

        let result = use_case.execute(params("")).await;

        assert!(matches!(result.unwrap_err(), HumanizeError::EmptyInput));
    }

    #[tokio::test]
    async fn should_report_missing_credential_before_validating_input() {
        let use_case = HumanizeContentUseCaseImpl {
            rewriter: None,
            logger: mock_logger(),
        };

        let result = use_case.execute(params("The quick brown fox.")).await;
        assert!(matches!(
            result.unwrap_err(),
            HumanizeError::MissingCredential
        ));

        let result = use_case.execute(params("")).await;
        assert!(matches!(
            result.unwrap_err(),
            HumanizeError::MissingCredential
        ));
    }

    #[tokio::test]
    async fn should_propagate_rewriter_failure_with_description() {
        let mut mock_rewriter = MockContentRewriter::new();
        mock_rewriter
            .expect_rewrite()
            .times(1)
            .returning(|_| Err(HumanizeError::generation_failed("provider returned 500")));

        let use_case = use_case_with(mock_rewriter);

        let result = use_case.execute(params("Some text")).await;

        let err = result.unwrap_err();
        assert_eq!(err.detail(), Some("provider returned 500"));
    }

    proptest! {
        #[test]
        fn whitespace_input_never_reaches_rewriter(text in "[ \t\r\n]{0,32}") {
            let mut mock_rewriter = MockContentRewriter::new();
            mock_rewriter.expect_rewrite().times(0);
            let use_case = use_case_with(mock_rewriter);

            let rt = tokio::runtime::Runtime::new().unwrap();
            let result = rt.block_on(use_case.execute(params(&text)));

            prop_assert!(matches!(result, Err(HumanizeError::EmptyInput)));
        }

        #[test]
        fn non_empty_input_is_sent_once_verbatim(
            text in "[ \t\n]{0,4}[A-Za-z0-9.,!?' ]{0,40}[A-Za-z0-9.,!?][ \t\n]{0,4}"
        ) {
            let expected = text.clone();
            let mut mock_rewriter = MockContentRewriter::new();
            mock_rewriter
                .expect_rewrite()
                .withf(move |prompt| {
                    prompt.messages().len() == 2
                        && prompt.system().content == SYSTEM_PROMPT
                        && prompt.human().content == expected
                })
                .times(1)
                .returning(|_| Ok(HumanizedContent::new("rewritten")));
            let use_case = use_case_with(mock_rewriter);

            let rt = tokio::runtime::Runtime::new().unwrap();
            let result = rt.block_on(use_case.execute(params(&text)));

            let content = result.unwrap();
            prop_assert_eq!(content.as_str(), "rewritten");
        }
    }
}
