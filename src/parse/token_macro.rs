/// Defines the logos token enum together with a fieldless [`TokenKind`] twin.
///
/// Tokens borrow from the text of a single file, so the preprocessor detaches them into
/// [`super::lexer::OwnedToken`]s (a kind plus its text) before splicing files together.
macro_rules! define_token_enum {
    (
        $( #[$($meta:tt)+] )*
        $vis:vis enum $Token:ident<$lt:lifetime> {
            $( #[token($fixed_str:literal)] $fixed_variant:ident, )*

            $(
                $( #[doc = $regex_doc:literal] )*
                #[regex($($regex_tt:tt)+)]
                $regex_variant:ident($regex_ty:ty),
            )*

            #[error]
            $( #[ $($error_meta:tt)+ ] )*
            Error,
        }
    ) => {
        $( #[$($meta)+] )*
        $vis enum $Token<$lt> {
            $( #[token($fixed_str)] $fixed_variant, )*

            $( $( #[doc = $regex_doc] )* #[regex($($regex_tt)+)] $regex_variant($regex_ty), )*

            #[error]
            $( #[ $($error_meta)+ ] )*
            Error,
        }

        /// The kind of a token, without its text.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        $vis enum TokenKind {
            $( $fixed_variant, )*
            $( $regex_variant, )*
            Error,
        }

        const _: () = {
            use ::core::fmt;

            impl<'input> $Token<'input> {
                pub fn as_str(&self) -> &'input str {
                    match self {
                        $( $Token::$fixed_variant => $fixed_str, )*
                        $( $Token::$regex_variant(str) => str, )*
                        $Token::Error => "<invalid>",
                    }
                }

                pub fn kind(&self) -> TokenKind {
                    match self {
                        $( $Token::$fixed_variant => TokenKind::$fixed_variant, )*
                        $( $Token::$regex_variant(_) => TokenKind::$regex_variant, )*
                        $Token::Error => TokenKind::Error,
                    }
                }
            }

            impl TokenKind {
                /// How the token kind is described in "expected ..." messages.
                pub fn descr(self) -> &'static str {
                    match self {
                        $( TokenKind::$fixed_variant => concat!("\"", $fixed_str, "\""), )*
                        $( TokenKind::$regex_variant => stringify!($regex_variant), )*
                        TokenKind::Error => "<invalid>",
                    }
                }
            }

            impl fmt::Display for $Token<'_> {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    fmt::Display::fmt(&self.as_str(), f)
                }
            }
        };
    };
}
