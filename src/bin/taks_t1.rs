use ::clap::{Parser, Subcommand};
use ::eyre::{Result, WrapErr};
use ::std::path::PathBuf;
use tracing::info;

use taks_t1::datasets::{clips_for_motion, Lafan1Clip};
use taks_t1::joints::joints_in;
use taks_t1::{initialize_file_and_console_logging, initialize_logging};
use taks_t1::{try_table, JointGroup, JointSpec, SceneConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the Taks_T1 scene files
    #[arg(long, global = true)]
    data_root: Option<PathBuf>,
    /// Also log to a daily file in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every table integrity check
    Validate,
    /// Print the scene file for a terrain task
    Scene {
        /// "flat_terrain" or "rough_terrain"
        task: String,
        /// Fail if the file is missing
        #[arg(long, default_value = "false")]
        check_exists: bool,
    },
    /// Print the joint table
    Joints {
        /// Only this group, e.g. "left_arm"
        #[arg(long)]
        group: Option<JointGroup>,
    },
    /// Print the LAFAN1 clip catalog
    Datasets {
        /// Only clips of this motion, e.g. "walk"
        #[arg(long)]
        motion: Option<String>,
    },
    /// Print the whole table as JSON
    Dump,
}

fn print_joint(idx: usize, joint: &JointSpec) {
    println!(
        "{:>2}  {:<28} {:<9} [{:>8.4}, {:>7.4}]  vel {:>5.1}  tau {:>5.1}  kp {:>5.1}  kd {:>4.1}  q0 {:>5.2}",
        idx,
        joint.name,
        joint.group.as_str(),
        joint.min(),
        joint.max(),
        joint.max_velocity,
        joint.max_torque,
        joint.kp,
        joint.kd,
        joint.default_position,
    );
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _guard = match &args.log_dir {
        Some(log_dir) => Some(initialize_file_and_console_logging(log_dir)?),
        None => {
            initialize_logging();
            None
        }
    };

    let scenes = match args.data_root {
        Some(root) => SceneConfig::with_data_root(root),
        None => SceneConfig::from_env(),
    };

    let table = try_table().wrap_err("Taks_T1 table failed validation")?;

    match args.command {
        Command::Validate => {
            println!("ok: {} joints, {} LAFAN1 clips", table.joints.len(), table.lafan1_datasets.len());
        }
        Command::Scene { task, check_exists } => {
            let path = if check_exists {
                scenes.resolve_existing(&task)?
            } else {
                scenes.resolve(&task)?
            };
            println!("{}", path.display());
        }
        Command::Joints { group } => match group {
            Some(group) => {
                for joint in joints_in(group) {
                    let idx = taks_t1::joint_index(joint.name)?;
                    print_joint(idx, joint);
                }
            }
            None => {
                for (idx, joint) in table.joints.iter().enumerate() {
                    print_joint(idx, joint);
                }
            }
        },
        Command::Datasets { motion } => {
            let clips = match motion {
                Some(motion) => clips_for_motion(&motion),
                None => table
                    .lafan1_datasets
                    .iter()
                    .map(|name| Lafan1Clip::parse(name))
                    .collect::<Result<Vec<_>, _>>()?,
            };
            for clip in &clips {
                println!("{}", clip.name);
            }
            info!("{} clips", clips.len());
        }
        Command::Dump => {
            println!("{}", serde_json::to_string_pretty(table)?);
        }
    }

    Ok(())
}
