use crate::models::Feedback;
use crate::ui::client::ApiClient;

/// 提交失败时弹出的固定文言
pub const SUBMIT_FAILED_MESSAGE: &str = "送信に失敗しました。もう一度お試しください。";

/// 反馈表单的四个输入框
#[derive(Debug, Clone, Default)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    pub category: String,
    pub message: String,
}

impl FeedbackForm {
    pub fn to_feedback(&self) -> Feedback {
        Feedback {
            name: self.name.clone(),
            email: self.email.clone(),
            category: self.category.clone(),
            message: self.message.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// 提交结果在画面上的表现
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackEffect {
    /// 2xx：显示确认横幅并清空表单
    ConfirmationShown,
    /// 非 2xx：阻断式弹窗
    Alert(String),
    /// 传输失败：仅记录日志，画面不变
    None,
}

/// 反馈提交器。不重试。
pub struct FeedbackSubmitter {
    client: ApiClient,
    pub form: FeedbackForm,
    confirmation_visible: bool,
}

impl FeedbackSubmitter {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            form: FeedbackForm::default(),
            confirmation_visible: false,
        }
    }

    pub fn confirmation_visible(&self) -> bool {
        self.confirmation_visible
    }

    pub async fn submit(&mut self) -> FeedbackEffect {
        match self.client.submit_feedback(&self.form.to_feedback()).await {
            Ok(status) if status.is_success() => {
                self.confirmation_visible = true;
                self.form.clear();
                FeedbackEffect::ConfirmationShown
            }
            Ok(_) => FeedbackEffect::Alert(SUBMIT_FAILED_MESSAGE.to_string()),
            Err(e) => {
                tracing::error!("Feedback submission failed: {}", e);
                FeedbackEffect::None
            }
        }
    }
}
