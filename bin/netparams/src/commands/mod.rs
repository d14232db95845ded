//! Contains subcommands for the netparams binary.

mod show;
pub(crate) use show::ShowCommand;

mod next;
pub(crate) use next::NextCommand;

mod gate;
pub(crate) use gate::GateCommand;
