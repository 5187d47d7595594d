//! 문자열 키로 표현되는 범주형 입력(연도 구간, 창호 종류 등)을 열거형으로 정의하는 매크로.
//!
//! 설문/카탈로그 파일에는 키 문자열이 들어오므로 serde는 `String`을 거쳐 변환한다.
//! 알 수 없는 키는 오류 대신 열거형마다 지정한 기본 항목으로 대체된다.

/// 키 비교 전에 공백/대소문자/구분자를 정리한다.
pub fn normalize_key(key: &str) -> String {
    key.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        pub enum $name:ident (fallback = $fallback:ident) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $key:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// 정의된 모든 항목.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// 파일/CLI에서 사용하는 키 문자열.
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            /// 키 문자열을 해석한다. 알 수 없는 키는 기본 항목으로 대체한다.
            pub fn from_key(key: &str) -> Self {
                match $crate::categorical::normalize_key(key).as_str() {
                    $($key => $name::$variant,)+
                    _ => {
                        tracing::warn!(
                            kind = stringify!($name),
                            key,
                            fallback = $name::$fallback.key(),
                            "unknown key, using fallback entry"
                        );
                        $name::$fallback
                    }
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$fallback
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name::from_key(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.key().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}
