use proc_macro::TokenStream;

mod command_code;

/// Map the unit variants of an enum to command bytes.
///
/// Every variant carries a `#[code(..)]` attribute holding a `u8`
/// expression:
///
/// ```ignore
/// #[derive(CommandCode)]
/// enum Command {
///     #[code(b'b')]
///     StartBlink,
///     #[code(b'o')]
///     StopBlink,
/// }
/// ```
///
/// Generates `code()`, `From<Enum> for u8` and `TryFrom<u8>` (the error
/// is the unrecognized byte). Duplicate codes fail to compile.
#[proc_macro_derive(CommandCode, attributes(code))]
pub fn command_code(item: TokenStream) -> TokenStream {
    command_code::derive(item)
}
