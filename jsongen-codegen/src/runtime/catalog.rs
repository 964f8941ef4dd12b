use std::{
    collections::{HashMap, HashSet},
    rc::Rc,
};

use indexmap::IndexMap;
use jsongen_model::{Struct, Type, TypeAliases, Vocabulary};
use serde_json::{Map, Value};

use super::{
    Decoded, DecodeError, Record,
    builtins::{self, decoder},
};
use crate::{
    decoder::{Callee, DecoderArg, DecoderExpr, DecoderScope, synthesize},
    plan::{RecordPlan, Statement, assemble_record},
};

/// A decoder closure: `None` means the value does not decode.
pub type Decoder = Rc<dyn Fn(&Value) -> Option<Decoded>>;

/// Decoders bound to the type parameters of the routine being run.
type Scope = HashMap<String, Decoder>;

#[derive(Clone)]
struct Catalog {
    records: IndexMap<String, RecordPlan>,
    aliases: TypeAliases,
    vocabulary: Vocabulary,
    casts: IndexMap<String, fn(&Value) -> bool>,
}

/// Runs record decode plans against JSON input.
///
/// Cheap to clone. Decoders built by the runtime hold a clone, so records
/// may refer to each other (and to themselves) by name.
#[derive(Clone)]
pub struct Runtime {
    catalog: Rc<Catalog>,
}

impl Runtime {
    /// Plan every record up front against the given registry and vocabulary.
    pub fn new<'a>(
        records: impl IntoIterator<Item = &'a Struct>,
        aliases: &TypeAliases,
        vocabulary: &Vocabulary,
    ) -> Self {
        let records = records
            .into_iter()
            .map(|s| (s.base_name.clone(), assemble_record(s, aliases, vocabulary)))
            .collect();

        let mut casts: IndexMap<String, fn(&Value) -> bool> = IndexMap::new();
        casts.insert("JsonObject".to_string(), Value::is_object);
        casts.insert("JsonArray".to_string(), Value::is_array);

        Self {
            catalog: Rc::new(Catalog {
                records,
                aliases: aliases.clone(),
                vocabulary: vocabulary.clone(),
                casts,
            }),
        }
    }

    /// Register the check behind a cast type name.
    pub fn with_cast(mut self, name: impl Into<String>, check: fn(&Value) -> bool) -> Self {
        Rc::make_mut(&mut self.catalog)
            .casts
            .insert(name.into(), check);
        self
    }

    /// The plan of a record, if known.
    pub fn plan(&self, record: &str) -> Option<&RecordPlan> {
        self.catalog.records.get(record)
    }

    /// Decode `value` as the non-generic record `record`.
    pub fn decode(&self, record: &str, value: &Value) -> Result<Decoded, DecodeError> {
        self.decode_with(record, &[], value)
    }

    /// Decode `value` as `record`, supplying one decoder per type parameter.
    pub fn decode_with(
        &self,
        record: &str,
        decoders: &[Decoder],
        value: &Value,
    ) -> Result<Decoded, DecodeError> {
        let plan = self
            .plan(record)
            .ok_or_else(|| DecodeError::UnknownDecoder {
                name: record.to_string(),
            })?;
        self.run(plan, decoders, value)
    }

    /// A decoder for a standalone type expression, outside any record.
    pub fn decoder_for(&self, ty: &Type) -> Result<Decoder, DecodeError> {
        let scope = DecoderScope::new(&self.catalog.vocabulary, &self.catalog.aliases);
        self.build(&synthesize(ty, &scope), &Scope::new())
    }

    /// Turn a decoder expression into a closure.
    fn build(&self, expr: &DecoderExpr, scope: &Scope) -> Result<Decoder, DecodeError> {
        match expr {
            DecoderExpr::Reinterpret(_) => Ok(decoder(|value| Some(Decoded::Json(value.clone())))),
            DecoderExpr::Downcast(name) => {
                let check = self.cast_check(name)?;
                Ok(decoder(move |value| {
                    check(value).then(|| Decoded::Json(value.clone()))
                }))
            }
            DecoderExpr::Invoke { callee, args } => {
                let args = args
                    .iter()
                    .map(|arg| self.build(argument(arg), scope))
                    .collect::<Result<Vec<_>, _>>()?;
                self.invoke(callee, args, scope)
            }
        }
    }

    fn invoke(&self, callee: &Callee, args: Vec<Decoder>, scope: &Scope) -> Result<Decoder, DecodeError> {
        match callee {
            Callee::Scope(name) => {
                let found = scope.get(name).ok_or_else(|| DecodeError::UnknownDecoder {
                    name: name.clone(),
                })?;
                if !args.is_empty() {
                    return Err(DecodeError::ArityMismatch {
                        name: name.clone(),
                        expected: 0,
                        found: args.len(),
                    });
                }
                Ok(Rc::clone(found))
            }
            Callee::Static(name) => {
                if self.plan(name).is_some() {
                    // Structural faults surface here; only data failures are
                    // left for the closure to turn into `None`.
                    self.verify_record(name, args.len(), &mut HashSet::new())?;
                    let runtime = self.clone();
                    let name = name.clone();
                    return Ok(decoder(move |value| {
                        runtime.decode_with(&name, &args, value).ok()
                    }));
                }
                builtins::instantiate(name, &args)?.ok_or_else(|| DecodeError::UnknownDecoder {
                    name: name.clone(),
                })
            }
        }
    }

    /// Check that `record` takes `arity` decoders and that every decoder
    /// its plan invokes resolves, following nested records once each.
    fn verify_record(
        &self,
        record: &str,
        arity: usize,
        seen: &mut HashSet<String>,
    ) -> Result<(), DecodeError> {
        let plan = self
            .plan(record)
            .ok_or_else(|| DecodeError::UnknownDecoder {
                name: record.to_string(),
            })?;
        if plan.type_arguments.len() != arity {
            return Err(DecodeError::ArityMismatch {
                name: record.to_string(),
                expected: plan.type_arguments.len(),
                found: arity,
            });
        }
        if !seen.insert(record.to_string()) {
            return Ok(());
        }

        for statement in plan.statements() {
            match statement {
                Statement::Decode { decoder, .. } => {
                    self.verify_expr(decoder, &plan.type_arguments, seen)?;
                }
                Statement::Downcast { ty, .. } => {
                    self.cast_check(&ty.base_name)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn verify_expr(
        &self,
        expr: &DecoderExpr,
        params: &[String],
        seen: &mut HashSet<String>,
    ) -> Result<(), DecodeError> {
        let DecoderExpr::Invoke { callee, args } = expr else {
            if let DecoderExpr::Downcast(name) = expr {
                self.cast_check(name)?;
            }
            return Ok(());
        };
        for arg in args {
            self.verify_expr(argument(arg), params, seen)?;
        }

        match callee {
            Callee::Scope(name) if params.contains(name) => {
                if args.is_empty() {
                    Ok(())
                } else {
                    Err(DecodeError::ArityMismatch {
                        name: name.clone(),
                        expected: 0,
                        found: args.len(),
                    })
                }
            }
            Callee::Scope(name) => Err(DecodeError::UnknownDecoder { name: name.clone() }),
            Callee::Static(name) if self.plan(name).is_some() => {
                self.verify_record(name, args.len(), seen)
            }
            Callee::Static(name) => match builtins::arity(name) {
                Some(expected) if expected == args.len() => Ok(()),
                Some(expected) => Err(DecodeError::ArityMismatch {
                    name: name.clone(),
                    expected,
                    found: args.len(),
                }),
                None => Err(DecodeError::UnknownDecoder { name: name.clone() }),
            },
        }
    }

    fn cast_check(&self, name: &str) -> Result<fn(&Value) -> bool, DecodeError> {
        self.catalog
            .casts
            .get(name)
            .copied()
            .ok_or_else(|| DecodeError::UnknownDecoder {
                name: name.to_string(),
            })
    }

    fn run(
        &self,
        plan: &RecordPlan,
        decoders: &[Decoder],
        value: &Value,
    ) -> Result<Decoded, DecodeError> {
        if decoders.len() != plan.type_arguments.len() {
            return Err(DecodeError::ArityMismatch {
                name: plan.name.clone(),
                expected: plan.type_arguments.len(),
                found: decoders.len(),
            });
        }
        let scope: Scope = plan
            .type_arguments
            .iter()
            .cloned()
            .zip(decoders.iter().cloned())
            .collect();
        let object = value.as_object().ok_or_else(|| DecodeError::NotAnObject {
            record: plan.name.clone(),
        })?;

        let mut frame = Frame::default();
        for statement in plan.statements() {
            if let Some(done) = self.execute(statement, object, &scope, &mut frame)? {
                return Ok(done);
            }
        }
        Err(DecodeError::Incomplete {
            record: plan.name.clone(),
        })
    }

    /// Execute one step. Returns the record once it is constructed.
    fn execute<'v>(
        &self,
        statement: &Statement,
        object: &'v Map<String, Value>,
        scope: &Scope,
        frame: &mut Frame<'v>,
    ) -> Result<Option<Decoded>, DecodeError> {
        match statement {
            Statement::Lookup { key, local } => {
                frame.raw.insert(local.clone(), object.get(key));
            }
            Statement::RequirePresent { local, field } => {
                if frame.raw(local)?.is_none() {
                    return Err(DecodeError::MissingField {
                        field: field.clone(),
                    });
                }
            }
            Statement::BindRaw { name, from, .. } => {
                let value = frame.present(from)?;
                frame.bound.insert(name.clone(), Decoded::Json(value.clone()));
            }
            Statement::Downcast { local, from, ty } => {
                let value = frame.present(from)?;
                let check = self.cast_check(&ty.base_name)?;
                let cast = check(value).then(|| Decoded::Json(value.clone()));
                frame.values.insert(local.clone(), cast);
            }
            Statement::Decode {
                local,
                from,
                decoder,
                absent_as_none,
                ..
            } => {
                let decoded = match frame.raw(from)? {
                    Some(value) => self.build(decoder, scope)?(value),
                    None if *absent_as_none => Some(Decoded::none()),
                    None => {
                        return Err(DecodeError::UnboundLocal {
                            local: from.clone(),
                        });
                    }
                };
                frame.values.insert(local.clone(), decoded);
            }
            Statement::RequireValue {
                local,
                field,
                expected,
            } => {
                if !frame.has_value(local)? {
                    return Err(DecodeError::TypeMismatch {
                        field: field.clone(),
                        expected: expected.to_string(),
                    });
                }
            }
            Statement::BindValue { name, from, .. } => {
                let value = frame.take_value(from)?;
                frame.bound.insert(name.clone(), value);
            }
            Statement::Construct { record, fields } => {
                let mut constructed = Record::new(record.clone());
                for field in fields {
                    let value = frame.take_bound(field)?;
                    constructed.fields.insert(field.clone(), value);
                }
                return Ok(Some(Decoded::Record(constructed)));
            }
        }
        Ok(None)
    }
}

fn argument(arg: &DecoderArg) -> &DecoderExpr {
    arg.expr()
}

/// Locals of one decode routine.
///
/// Raw lookups, decode results and bound fields live apart, so a field
/// named like another field's helper local never shadows it.
#[derive(Default)]
struct Frame<'v> {
    raw: HashMap<String, Option<&'v Value>>,
    values: HashMap<String, Option<Decoded>>,
    bound: HashMap<String, Decoded>,
}

impl<'v> Frame<'v> {
    fn unbound(local: &str) -> DecodeError {
        DecodeError::UnboundLocal {
            local: local.to_string(),
        }
    }

    fn raw(&self, local: &str) -> Result<Option<&'v Value>, DecodeError> {
        self.raw
            .get(local)
            .copied()
            .ok_or_else(|| Self::unbound(local))
    }

    fn present(&self, local: &str) -> Result<&'v Value, DecodeError> {
        self.raw(local)?.ok_or_else(|| Self::unbound(local))
    }

    fn has_value(&self, local: &str) -> Result<bool, DecodeError> {
        self.values
            .get(local)
            .map(Option::is_some)
            .ok_or_else(|| Self::unbound(local))
    }

    fn take_value(&mut self, local: &str) -> Result<Decoded, DecodeError> {
        self.values
            .remove(local)
            .flatten()
            .ok_or_else(|| Self::unbound(local))
    }

    fn take_bound(&mut self, local: &str) -> Result<Decoded, DecodeError> {
        self.bound
            .remove(local)
            .ok_or_else(|| Self::unbound(local))
    }
}
