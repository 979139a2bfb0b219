use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    obsctl completions bash > ~/.bash_completion.d/obsctl\n\n\
                  Generate zsh completions:\n    obsctl completions zsh > ~/.zfunc/_obsctl\n\n\
                  Generate fish completions:\n    obsctl completions fish > ~/.config/fish/completions/obsctl.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
