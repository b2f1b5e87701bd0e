//! Structural context of an identifier, derived from its parent and
//! grandparent nodes.

use camelint_js_cst::CstNode;

/// Parent node shapes the camelcase check distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParentKind {
    /// `obj.prop`
    MemberAccess,
    /// `obj[expr]`
    Subscript,
    /// `a = b`, `a += b`
    Assignment,
    /// `f(...)`; an identifier child is the callee
    Call,
    /// `new F(...)`; an identifier child is the constructor
    New,
    /// the `(...)` of a call or `new`
    Arguments,
    Object,
    Pair,
    PairPattern,
    MethodDefinition,
    ImportSpecifier,
    ImportClause,
    NamespaceImport,
    /// Opening, closing or self-closing JSX tag; identifier children name it
    JsxElement,
    /// `name="value"`; identifier children are the attribute name
    JsxAttribute,
    /// `ns:name` inside a tag or attribute name
    JsxNamespaceName,
    Other,
}

impl ParentKind {
    fn of(node: &CstNode<'_>) -> Self {
        match node.kind() {
            "member_expression" => Self::MemberAccess,
            "subscript_expression" => Self::Subscript,
            "assignment_expression" | "augmented_assignment_expression" => Self::Assignment,
            "call_expression" => Self::Call,
            "new_expression" => Self::New,
            "arguments" => Self::Arguments,
            "object" => Self::Object,
            "pair" => Self::Pair,
            "pair_pattern" => Self::PairPattern,
            "method_definition" => Self::MethodDefinition,
            "import_specifier" => Self::ImportSpecifier,
            "import_clause" => Self::ImportClause,
            "namespace_import" => Self::NamespaceImport,
            "jsx_opening_element" | "jsx_closing_element" | "jsx_self_closing_element" => {
                Self::JsxElement
            }
            "jsx_attribute" => Self::JsxAttribute,
            "jsx_namespace_name" => Self::JsxNamespaceName,
            _ => Self::Other,
        }
    }

    fn of_opt(node: Option<&CstNode<'_>>) -> Self {
        node.map_or(Self::Other, Self::of)
    }

    fn is_call_position(self) -> bool {
        matches!(self, Self::Call | Self::New | Self::Arguments)
    }
}

/// The role an identifier plays, as far as naming is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind<'a> {
    /// Variable, function, parameter, class or label name, or a reference to one.
    PlainReference,
    /// Either side of a member access that is not an assignment target.
    ObjectMemberAccess { is_object: bool },
    /// Property name of a member access on the left of an assignment.
    AssignmentTarget,
    /// Key or value of an object literal or destructuring entry.
    ObjectPropertyKeyOrValue { passed_as_argument: bool },
    /// Key role of a shorthand destructuring entry such as `{ foo } = obj`.
    ObjectPatternShorthand,
    /// Name inside an import declaration.
    ImportBinding { local_name: Option<&'a str> },
    /// Callee, constructor or direct argument of a call or `new`.
    CallOrConstructorArgumentPosition,
}

/// Every role `node` plays, in the order they should be judged.
///
/// Most identifiers have exactly one role. A shorthand destructuring entry is
/// both a pattern key and the binding it declares. JSX tag and attribute
/// names have none; expressions inside `{...}` are ordinary code.
pub fn identifier_contexts<'a>(node: &CstNode<'a>) -> Vec<ContextKind<'a>> {
    if is_jsx_name(node) {
        return vec![];
    }

    match node.kind() {
        "shorthand_property_identifier_pattern" => {
            return vec![ContextKind::ObjectPatternShorthand, plain_context(node)];
        }
        "shorthand_property_identifier" => {
            return vec![property_context(node.parent())];
        }
        _ => {}
    }

    let Some(parent) = node.parent() else {
        return vec![ContextKind::PlainReference];
    };

    let context = match ParentKind::of(&parent) {
        ParentKind::MemberAccess => {
            if parent.field_is("object", node) {
                ContextKind::ObjectMemberAccess { is_object: true }
            } else if is_assignment_target(&parent) {
                ContextKind::AssignmentTarget
            } else {
                ContextKind::ObjectMemberAccess { is_object: false }
            }
        }
        // A computed index is an ordinary expression, not a property name.
        ParentKind::Subscript if parent.field_is("object", node) => {
            ContextKind::ObjectMemberAccess { is_object: true }
        }
        ParentKind::Pair | ParentKind::PairPattern => property_context(parent.parent()),
        ParentKind::MethodDefinition
            if ParentKind::of_opt(parent.parent().as_ref()) == ParentKind::Object =>
        {
            property_context(parent.parent())
        }
        ParentKind::ImportSpecifier => {
            let local = parent
                .child_by_field_name("alias")
                .or_else(|| parent.child_by_field_name("name"));
            ContextKind::ImportBinding {
                local_name: local.map(|n| n.text()),
            }
        }
        ParentKind::ImportClause | ParentKind::NamespaceImport => ContextKind::ImportBinding {
            local_name: Some(node.text()),
        },
        _ => plain_context(node),
    };

    vec![context]
}

/// Whether `node` is part of a JSX tag or attribute name, including the
/// pieces of `<Foo.Bar>` and `<svg:rect>`.
fn is_jsx_name(node: &CstNode<'_>) -> bool {
    let mut current = *node;
    while let Some(parent) = current.parent() {
        match ParentKind::of(&parent) {
            ParentKind::MemberAccess | ParentKind::JsxNamespaceName => current = parent,
            ParentKind::JsxElement | ParentKind::JsxAttribute => return true,
            _ => return false,
        }
    }
    false
}

/// Whether `member` is the left-hand side of an assignment.
fn is_assignment_target(member: &CstNode<'_>) -> bool {
    member.parent().is_some_and(|grandparent| {
        ParentKind::of(&grandparent) == ParentKind::Assignment
            && grandparent.field_is("left", member)
    })
}

/// Context of a key or value inside `object`, an object literal or pattern.
fn property_context(object: Option<CstNode<'_>>) -> ContextKind<'static> {
    let passed_as_argument = object
        .and_then(|o| o.parent())
        .is_some_and(|p| ParentKind::of(&p) == ParentKind::Arguments);
    ContextKind::ObjectPropertyKeyOrValue { passed_as_argument }
}

/// Context of an identifier that is not a property name.
///
/// The call exemption looks through one level of member access, so the
/// index in `f(obj[my_key])` sits in argument position.
fn plain_context(node: &CstNode<'_>) -> ContextKind<'static> {
    let parent = node.parent();
    let effective_parent = match ParentKind::of_opt(parent.as_ref()) {
        ParentKind::MemberAccess | ParentKind::Subscript => parent.and_then(|p| p.parent()),
        _ => parent,
    };

    if ParentKind::of_opt(effective_parent.as_ref()).is_call_position() {
        ContextKind::CallOrConstructorArgumentPosition
    } else {
        ContextKind::PlainReference
    }
}
