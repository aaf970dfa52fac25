use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;

fn err(span: Span, message: &str) -> TokenStream {
    syn::Error::new(span, message).into_compile_error().into()
}

/// Times every call of the annotated function and logs the result at debug level.
///
/// The label defaults to the function's path; `#[timed("label")]` overrides it.
#[proc_macro_attribute]
pub fn timed(args: TokenStream, item: TokenStream) -> TokenStream {
    let mut f: syn::ItemFn = match syn::parse(item) {
        Ok(f) => f,
        Err(_) => return err(Span::call_site(), "#[timed] only applies to functions"),
    };

    let label = if args.is_empty() {
        let name = &f.sig.ident;
        quote! { concat!(module_path!(), "::", stringify!(#name)) }
    } else {
        match syn::parse::<syn::LitStr>(args) {
            Ok(label) => quote! { #label },
            Err(e) => return e.into_compile_error().into(),
        }
    };

    let guard: syn::Stmt = syn::parse_quote! {
        let __toolbelt_timed = ::toolbelt::TimedGuard::new(#label);
    };
    f.block.stmts.insert(0, guard);

    quote! { #f }.into()
}
