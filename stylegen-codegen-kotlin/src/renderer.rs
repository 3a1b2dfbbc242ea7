//! Declaration model to Kotlin AST conversion.
//!
//! Walks the language-agnostic declarations of a [`StyleArtifactSet`],
//! spells each one as a Kotlin AST node and records every import the
//! spelled text needs.

use stylegen_codegen::{
    builder::{
        AccessorSpec, Body, ClassKind, ClassSpec, ConstructArg, Conversion, FunSpec, Initializer,
        InterfaceSpec, ParamSpec, PropertySpec, Renderable, TypeMapper, TypeRef,
    },
    generator::{Declaration, StyleArtifactSet},
    language::NamingConvention,
    naming::{BUILD_FN, FACTORY_FN},
};

use crate::{
    ast::{Class, ClassFlavor, CompositionLocal, Fun, FunBody, Interface, Param, Property},
    imports::ImportCollector,
    kotlin_file::KotlinFile,
    naming::KOTLIN_NAMING,
    type_mapper::{AS_INTERACTIVE, COMPOSE_RUNTIME, KotlinTypeMapper, UIKIT_INTERACTIONS},
};

/// First line of every generated unit.
pub const GENERATED_HEADER: &str = "// Code generated by stylegen. DO NOT EDIT.";

const IMMUTABLE: &str = "Immutable";

/// Stateful renderer for one unit.
pub struct KotlinRenderer {
    mapper: KotlinTypeMapper,
    naming: NamingConvention,
    imports: ImportCollector,
}

impl KotlinRenderer {
    pub fn new() -> Self {
        Self {
            mapper: KotlinTypeMapper,
            naming: KOTLIN_NAMING,
            imports: ImportCollector::new(),
        }
    }

    /// Imports recorded so far.
    pub fn imports(&self) -> &ImportCollector {
        &self.imports
    }

    /// Render the accessor and the nine declarations as one Kotlin file.
    pub fn render_unit(mut self, artifacts: &StyleArtifactSet, package: &str) -> String {
        let local = self.local(&artifacts.accessor);
        let mut body: Vec<Box<dyn Renderable>> = vec![Box::new(local)];
        for declaration in artifacts.declarations() {
            match declaration {
                Declaration::Interface(spec) => body.push(Box::new(self.interface(spec))),
                Declaration::Class(spec) => body.push(Box::new(self.class(spec))),
            }
        }

        KotlinFile::new(package)
            .header(GENERATED_HEADER)
            .imports(self.imports.lines(package))
            .declarations(body)
            .render()
    }

    pub fn local(&mut self, accessor: &AccessorSpec) -> CompositionLocal {
        self.imports.extend([
            (COMPOSE_RUNTIME, "ProvidableCompositionLocal"),
            (COMPOSE_RUNTIME, "compositionLocalOf"),
            (COMPOSE_RUNTIME, "structuralEqualityPolicy"),
        ]);
        let default = format!("{}.{}().{}()", accessor.style, FACTORY_FN, BUILD_FN);
        let local = CompositionLocal::new(&accessor.name, &accessor.style, default);
        match &accessor.doc {
            Some(doc) => local.doc(doc),
            None => local,
        }
    }

    pub fn interface(&mut self, spec: &InterfaceSpec) -> Interface {
        let mut iface = Interface::new(&spec.name);
        if let Some(doc) = &spec.doc {
            iface = iface.doc(doc);
        }
        if spec.immutable {
            self.imports.add(COMPOSE_RUNTIME, IMMUTABLE);
            iface = iface.annotation(IMMUTABLE);
        }
        for supertype in &spec.supertypes {
            iface = iface.supertype(self.ty(supertype));
        }
        for prop in &spec.properties {
            iface = iface.property(self.property(prop));
        }
        for fun in &spec.functions {
            iface = iface.function(self.fun(fun));
        }
        if let Some(companion) = &spec.companion {
            let functions = companion.functions.iter().map(|f| self.fun(f)).collect();
            iface = iface.companion(functions);
        }
        iface
    }

    pub fn class(&mut self, spec: &ClassSpec) -> Class {
        let flavor = match spec.kind {
            ClassKind::Plain => ClassFlavor::Class,
            ClassKind::Data => ClassFlavor::DataClass,
            ClassKind::DataObject => ClassFlavor::DataObject,
        };
        let mut class = Class::new(&spec.name, flavor);
        if let Some(doc) = &spec.doc {
            class = class.doc(doc);
        }
        if spec.visibility.is_private() {
            class = class.private();
        }
        for prop in &spec.constructor {
            class = class.constructor_property(self.property(prop));
        }
        for supertype in &spec.supertypes {
            class = class.supertype(supertype);
        }
        for prop in &spec.properties {
            class = class.property(self.property(prop));
        }
        for fun in &spec.functions {
            class = class.function(self.fun(fun));
        }
        for nested in &spec.nested {
            class = class.nested(self.class(nested));
        }
        class
    }

    fn property(&mut self, spec: &PropertySpec) -> Property {
        let mut prop = Property::new(self.naming.safe_name(&spec.name), self.ty(&spec.ty));
        if let Some(doc) = &spec.doc {
            prop = prop.doc(doc);
        }
        if spec.visibility.is_private() {
            prop = prop.private();
        }
        if spec.is_override {
            prop = prop.overriding();
        }
        if spec.mutable {
            prop = prop.mutable();
        }
        match &spec.initializer {
            Some(Initializer::Null) => prop.initializer("null"),
            Some(Initializer::NewBuilder { contract }) => {
                prop.initializer(format!("{}.{}()", contract, FACTORY_FN))
            }
            None => prop,
        }
    }

    fn fun(&mut self, spec: &FunSpec) -> Fun {
        let mut fun = Fun::new(self.naming.safe_name(&spec.name), self.ty(&spec.returns));
        if let Some(doc) = &spec.doc {
            fun = fun.doc(doc);
        }
        if spec.is_override {
            fun = fun.overriding();
        }
        for param in &spec.params {
            fun = fun.param(self.param(param));
        }
        fun.body(self.body(&spec.body))
    }

    fn param(&mut self, spec: &ParamSpec) -> Param {
        let param = Param::new(self.naming.safe_name(&spec.name), self.ty(&spec.ty));
        if spec.defaults_to_null {
            param.default("null")
        } else {
            param
        }
    }

    fn body(&mut self, body: &Body) -> FunBody {
        match body {
            Body::Abstract => FunBody::None,
            Body::AssignField { field, param } => FunBody::Expr(format!(
                "apply {{ this.{} = {} }}",
                self.naming.safe_name(field),
                self.naming.safe_name(param)
            )),
            Body::Convert {
                target,
                param,
                conversion: Conversion::Interactive,
            } => {
                self.imports.add(UIKIT_INTERACTIONS, AS_INTERACTIVE);
                FunBody::Expr(format!(
                    "{}({}.{}())",
                    self.naming.safe_name(target),
                    self.naming.safe_name(param),
                    AS_INTERACTIVE
                ))
            }
            Body::Configure {
                builder_field,
                callback,
            } => FunBody::Expr(format!(
                "apply {{ {}.{}() }}",
                self.naming.safe_name(builder_field),
                self.naming.safe_name(callback)
            )),
            Body::Instantiate { path } => FunBody::Expr(format!("{}()", path.join("."))),
            Body::Construct { class, args } => FunBody::NamedCall {
                callee: class.clone(),
                args: args.iter().map(|arg| self.construct_arg(arg)).collect(),
            },
            Body::Singleton { object } => FunBody::Expr(object.clone()),
        }
    }

    fn construct_arg(&mut self, arg: &ConstructArg) -> (String, String) {
        match arg {
            ConstructArg::Resolve {
                property,
                field,
                default,
                ..
            } => {
                self.imports.extend(self.mapper.value_imports(default));
                (
                    self.naming.safe_name(property).into_owned(),
                    format!(
                        "{} ?: {}",
                        self.naming.safe_name(field),
                        self.mapper.render_value(default)
                    ),
                )
            }
            ConstructArg::BuildDelegate {
                property,
                builder_field,
            } => (
                self.naming.safe_name(property).into_owned(),
                format!("{}.{}()", self.naming.safe_name(builder_field), BUILD_FN),
            ),
        }
    }

    /// Render a type and record the imports it needs.
    fn ty(&mut self, ty: &TypeRef) -> String {
        self.imports.extend(self.mapper.type_ref_imports(ty));
        self.mapper.render_type(ty)
    }
}

impl Default for KotlinRenderer {
    fn default() -> Self {
        Self::new()
    }
}
