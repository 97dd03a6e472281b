//! # 사용자 관리 서비스 구현
//!
//! 회원가입과 로그인 자격 증명 확인을 담당합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  UserService                    │
//! ├─────────────────────────────────────────────────┤
//! │  ┌─────────────────┐  ┌─────────────────┐       │
//! │  │   Registration  │  │  Authentication │       │
//! │  │                 │  │                 │       │
//! │  │ • Input Valid   │  │ • Lookup        │       │
//! │  │ • Password Hash │  │ • Password Ver  │       │
//! │  │ • Duplicate Chk │  │ • Token Issue   │       │
//! │  └─────────────────┘  └─────────────────┘       │
//! └─────────────────────────────────────────────────┘
//!                         │
//!                         ▼
//! ┌─────────────────────────────────────────────────┐
//! │            dyn UserRepository                   │
//! │ • MongoDB (username 유니크 인덱스)              │
//! │ • In-Memory                                     │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 환경별 cost (`BCRYPT_COST` 로 재정의 가능)
//! - **열거 방지**: 존재하지 않는 사용자와 틀린 비밀번호를 같은 메시지로 응답
//! - **민감 정보 제거**: 응답에는 ID와 사용자명만 포함

use std::sync::Arc;

use bcrypt::{hash, verify};

use crate::{
    domain::{
        dto::users::{LoginRequest, LoginResponse, RegisterRequest, UserSummary},
        entities::users::user::User,
    },
    errors::{AppError, ErrorContext},
    repositories::users::UserRepository,
    services::auth::TokenService,
    utils::string_utils::validate_required_string,
};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소는 생성 시점에 주입되며, MongoDB와 메모리 구현 중 무엇이 들어오는지
/// 알지 못합니다.
///
/// ```rust,ignore
/// let user_service = UserService::new(repositories.users.clone(), token_service, 4);
/// user_service.register(request).await?;
/// let response = user_service.login(request).await?;
/// ```
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    token_service: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, token_service: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self { user_repo, token_service, bcrypt_cost }
    }

    /// 새 계정 생성
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 빈 사용자명/비밀번호, 또는 이미 존재하는 사용자명
    /// * `InternalError` - 비밀번호 해싱 실패
    pub async fn register(&self, request: RegisterRequest) -> Result<User, AppError> {
        let username = validate_required_string(&request.username, "Username")?;
        if request.password.is_empty() {
            return Err(AppError::ValidationError("Password is required".to_string()));
        }

        let start_time = std::time::Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost)
            .context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", start_time.elapsed());

        let created_user = self.user_repo
            .create(User::new(username, password_hash))
            .await?;

        log::info!("👤 사용자 등록: {}", created_user.username);
        Ok(created_user)
    }

    /// 자격 증명 확인 후 토큰 발급
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let username = request.username.trim();

        let user = match self.user_repo.find_by_username(username).await? {
            Some(user) => user,
            None => {
                log::warn!("로그인 실패 - 존재하지 않는 사용자: {}", username);
                return Err(AppError::ValidationError(INVALID_CREDENTIALS_MESSAGE.to_string()));
            }
        };

        let is_valid = verify(&request.password, &user.password_hash)
            .with_context(|| format!("비밀번호 검증 실패 - 사용자: {}", username))?;

        if !is_valid {
            log::warn!("로그인 실패 - 비밀번호 불일치: {}", username);
            return Err(AppError::ValidationError(INVALID_CREDENTIALS_MESSAGE.to_string()));
        }

        let token = self.token_service.generate_token(&user)?;
        let summary = UserSummary {
            id: user.id_string().unwrap_or_default(),
            username: user.username,
        };

        Ok(LoginResponse::new(token, summary))
    }
}
