use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::models::{Channel, Feedback, Level, SearchResponse};

/// 画面层与后端通信时的错误
#[derive(Debug, Error)]
pub enum ClientError {
    /// 传输层失败（连接、超时、响应体解析）
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// 服务器返回了非 2xx 状态
    #[error("server returned {0}")]
    Status(StatusCode),
}

/// 后端 API 客户端
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// 一次检索请求的全部参数，与画面上的输入一一对应
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub q: String,
    pub category: String,
    pub players: String,
    pub level: String,
    pub channel: String,
    pub sort: String,
    pub limit: i64,
    pub offset: i64,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// 指定列的去重标签一览
    pub async fn unique_values(&self, column: &str) -> Result<Vec<String>, ClientError> {
        let url = format!("{}/get_unique_values/{}", self.base_url, column);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    pub async fn levels(&self) -> Result<Vec<Level>, ClientError> {
        let url = format!("{}/get_levels", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    pub async fn channels(&self) -> Result<Vec<Channel>, ClientError> {
        let url = format!("{}/get_channels", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// 检索。参数全部以字符串形式发送，与浏览器的查询串一致。
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ClientError> {
        let url = format!("{}/search", self.base_url);
        let limit = request.limit.to_string();
        let offset = request.offset.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", request.q.as_str()),
                ("type", request.category.as_str()),
                ("players", request.players.as_str()),
                ("level", request.level.as_str()),
                ("channel", request.channel.as_str()),
                ("sort", request.sort.as_str()),
                ("limit", limit.as_str()),
                ("offset", offset.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// 反馈提交。状态码原样返回，由调用方区分成功与拒绝；
    /// 只有传输层失败才作为 Err。
    pub async fn submit_feedback(&self, feedback: &Feedback) -> Result<StatusCode, ClientError> {
        let url = format!("{}/submit-feedback", self.base_url);
        let response = self.client.post(&url).json(feedback).send().await?;
        Ok(response.status())
    }
}
