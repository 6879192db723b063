//! Procedural macros for the tour-kit library

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, DeriveInput, Expr, FnArg, ItemFn, Lit, Pat};

/// Derive macro for automatically registering demos with the plugin system
///
/// This macro generates the necessary code to register a demo with the
/// inventory system, allowing it to be discovered and run by name.
///
/// # Attributes
///
/// - `name`: Required. Unique demo name used for lookup and filtering
/// - `order`: Required. Position in the default run order (lower runs first)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["functions"])
///
/// # Requirements
///
/// The type must implement the `Demo` trait. If it does not, the error points
/// at the type:
///
/// ```text
/// error[E0277]: the trait bound `YourDemo: Demo` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use tour_kit::{Demo, DemoError, Transcript};
/// use tour_kit_macros::AutoRegisterDemo;
///
/// #[derive(AutoRegisterDemo)]
/// #[demo(name = "args", order = 1, tags = ["functions"])]
/// struct ArgsDemo;
///
/// impl Demo for ArgsDemo {
///     // ... implementation
/// }
/// ```
#[proc_macro_derive(AutoRegisterDemo, attributes(demo))]
pub fn derive_auto_register_demo(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let ident = &input.ident;

    let demo_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("demo"))
        .expect("AutoRegisterDemo derive macro requires #[demo(...)] attribute");

    let mut name: Option<String> = None;
    let mut order: Option<u16> = None;
    let mut tags: Vec<String> = Vec::new();

    demo_attr
        .parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Str(lit_str) = value {
                    name = Some(lit_str.value());
                }
            } else if meta.path.is_ident("order") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    order = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("tags") {
                // tags = ["a", "b"]
                let _ = meta.value()?;
                let content;
                syn::bracketed!(content in meta.input);
                while !content.is_empty() {
                    let lit: Lit = content.parse()?;
                    if let Lit::Str(lit_str) = lit {
                        tags.push(lit_str.value());
                    }
                    if content.peek(syn::Token![,]) {
                        let _: syn::Token![,] = content.parse()?;
                    }
                }
            } else {
                return Err(meta.error("expected `name`, `order` or `tags`"));
            }
            Ok(())
        })
        .expect("Failed to parse #[demo(...)] attribute");

    let name = name.expect("Missing required 'name' attribute");
    let order = order.expect("Missing required 'order' attribute");

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    let expanded = quote! {
        const _: () = {
            trait MustImplementDemo: ::tour_kit::Demo {}
            impl MustImplementDemo for #ident {}
        };

        ::tour_kit::inventory::submit! {
            ::tour_kit::DemoPlugin {
                name: #name,
                order: #order,
                demo: &#ident,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}

/// Attribute macro applying a decorator to a free function
///
/// `#[decorate(expr)]` keeps the function's name, signature and visibility,
/// moves its body into an inner function and makes the outer function call
/// `(expr)(inner)(args...)`. The decorator is any expression that takes the
/// function and returns something callable with the same arguments.
///
/// Stacked attributes apply innermost first, so
///
/// ```ignore
/// #[decorate(bold)]
/// #[decorate(italic)]
/// fn greet(name: &str) -> String { format!("Hi {name}") }
/// ```
///
/// behaves like `bold(italic(greet))`.
///
/// The inner function is named `<name>_undecorated`; each stacked attribute
/// appends another suffix.
///
/// Parameters must be plain identifiers; methods are not supported.
#[proc_macro_attribute]
pub fn decorate(attr: TokenStream, item: TokenStream) -> TokenStream {
    let decorator = parse_macro_input!(attr as Expr);
    let func = parse_macro_input!(item as ItemFn);

    let mut args = Vec::new();
    for input in &func.sig.inputs {
        match input {
            FnArg::Typed(pat_type) => match &*pat_type.pat {
                Pat::Ident(pat_ident) => args.push(pat_ident.ident.clone()),
                other => {
                    return syn::Error::new_spanned(
                        other,
                        "#[decorate] requires plain identifier parameters",
                    )
                    .to_compile_error()
                    .into();
                }
            },
            FnArg::Receiver(receiver) => {
                return syn::Error::new_spanned(receiver, "#[decorate] cannot be applied to methods")
                    .to_compile_error()
                    .into();
            }
        }
    }

    // Remaining #[decorate] attributes wrap the undecorated body first;
    // everything else (docs, cfg, allow) stays on the public function.
    let (inner_attrs, outer_attrs): (Vec<_>, Vec<_>) = func
        .attrs
        .iter()
        .partition(|attr| attr.path().segments.last().is_some_and(|s| s.ident == "decorate"));

    let inner_ident = format_ident!("{}_undecorated", func.sig.ident);
    let mut inner_sig = func.sig.clone();
    inner_sig.ident = inner_ident.clone();

    // The outer function only forwards its arguments.
    let mut sig = func.sig.clone();
    for input in sig.inputs.iter_mut() {
        if let FnArg::Typed(pat_type) = input
            && let Pat::Ident(pat_ident) = &mut *pat_type.pat
        {
            pat_ident.mutability = None;
        }
    }

    let vis = &func.vis;
    let block = &func.block;

    let expanded = quote! {
        #(#outer_attrs)*
        #vis #sig {
            #(#inner_attrs)*
            #inner_sig #block

            (#decorator)(#inner_ident)(#(#args),*)
        }
    };

    TokenStream::from(expanded)
}
