//! Built-in kubectl vocabulary

use crate::parts::group::Group;
use crate::parts::part::Part;
use crate::parts::vocabulary::Vocabulary;

/// Static definition of a part
struct PartDef {
    alias: &'static str,
    full: &'static str,
    allow_when_one_of: &'static [&'static str],
    incompatible_with: &'static [&'static str],
}

const fn part(
    alias: &'static str,
    full: &'static str,
    allow_when_one_of: &'static [&'static str],
    incompatible_with: &'static [&'static str],
) -> PartDef {
    PartDef {
        alias,
        full,
        allow_when_one_of,
        incompatible_with,
    }
}

impl PartDef {
    fn to_part(&self) -> Part {
        Part::new(self.alias, self.full)
            .allow_when_one_of(self.allow_when_one_of.iter().copied())
            .incompatible_with(self.incompatible_with.iter().copied())
    }
}

const COMMANDS: &[PartDef] = &[part("k", "kubectl", &[], &[])];

const GLOBAL_OPTIONS: &[PartDef] = &[part("sys", "--namespace=kube-system", &[], &[])];

const OPERATIONS: &[PartDef] = &[
    part("a", "apply --recursive -f", &[], &[]),
    part("ak", "apply -k", &[], &["sys"]),
    part("k", "kustomize", &[], &["sys"]),
    part("ex", "exec -i -t", &[], &[]),
    part("lo", "logs -f", &[], &[]),
    part("lop", "logs -f -p", &[], &[]),
    part("p", "proxy", &[], &["sys"]),
    part("pf", "port-forward", &[], &["sys"]),
    part("g", "get", &[], &[]),
    part("d", "describe", &[], &["sys"]),
    part("rm", "delete", &[], &["sys"]),
    part(
        "run",
        "run --rm --restart=Never --image-pull-policy=IfNotPresent -i -t",
        &[],
        &[],
    ),
];

const RESOURCES: &[PartDef] = &[
    part("po", "pods", &["g", "d", "rm"], &[]),
    part("dep", "deployment", &["g", "d", "rm"], &[]),
    part("sts", "statefulset", &["g", "d", "rm"], &[]),
    part("svc", "service", &["g", "d", "rm"], &[]),
    part("ing", "ingress", &["g", "d", "rm"], &[]),
    part("cm", "configmap", &["g", "d", "rm"], &[]),
    part("sec", "secret", &["g", "d", "rm"], &[]),
    part("no", "nodes", &["g", "d"], &["sys"]),
    part("ns", "namespaces", &["g", "d"], &["sys"]),
    // istio
    part("vs", "virtualservices", &["g", "d", "rm"], &[]),
];

const ARGUMENTS: &[PartDef] = &[
    part("oyaml", "-o=yaml", &["g"], &["owide", "ojson", "sl"]),
    part("owide", "-o=wide", &["g"], &["oyaml", "ojson"]),
    part("ojson", "-o=json", &["g"], &["owide", "oyaml", "sl"]),
    part("all", "--all-namespaces", &["g", "d"], &["rm", "f", "no", "sys"]),
    part("sl", "--show-labels", &["g"], &["oyaml", "ojson"]),
    part("all", "--all", &["rm"], &[]),
    part("w", "--watch", &["g"], &["oyaml", "ojson", "owide"]),
];

/// Aliases `-f` may never be combined with, on top of every resource alias
const FILE_EXCLUSIONS: &[&str] = &["all", "l", "sys"];

fn group(defs: &[PartDef]) -> Group {
    defs.iter().map(PartDef::to_part).collect::<Vec<_>>().into()
}

fn positional_arguments(resources: &Group) -> Group {
    let file_exclusions = resources
        .aliases()
        .chain(FILE_EXCLUSIONS.iter().copied())
        .collect::<Vec<_>>();
    vec![
        Part::new("f", "--recursive -f")
            .allow_when_one_of(["g", "d", "rm"])
            .incompatible_with(file_exclusions),
        Part::new("l", "-l")
            .allow_when_one_of(["g", "d", "rm"])
            .incompatible_with(["f", "all"]),
        Part::new("n", "--namespace")
            .allow_when_one_of(["g", "d", "rm", "lo", "ex", "pf"])
            .incompatible_with(["ns", "no", "sys", "all"]),
    ]
    .into()
}

/// The vocabulary used when no vocabulary file is given
#[must_use]
pub fn vocabulary() -> Vocabulary {
    let resources = group(RESOURCES);
    let positional_arguments = positional_arguments(&resources);
    Vocabulary {
        commands: group(COMMANDS),
        global_options: group(GLOBAL_OPTIONS),
        operations: group(OPERATIONS),
        resources,
        arguments: group(ARGUMENTS),
        positional_arguments,
    }
}
